//! The built-in Team DNA questionnaire.

use crate::model::Category::{
    Adventure, Creative, Culinary, History, Nature, Sports, TeamBuilding, Wellness,
};
use crate::model::{AnswerOption, Localized, QuizQuestion};

pub static TEAM_DNA_QUIZ: &[QuizQuestion] = &[
    QuizQuestion {
        id: "ideal-morning",
        text: Localized {
            he: "איך נראה הבוקר האידיאלי של הצוות שלכם?",
            en: "What does your team's ideal morning look like?",
        },
        answers: &[
            AnswerOption {
                text: Localized {
                    he: "זריחה על ג'יפים בשטח",
                    en: "Sunrise on an off-road jeep ride",
                },
                weights: &[(Adventure, 3), (Nature, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "הליכה שקטה לאורך נחל",
                    en: "A quiet walk along a stream",
                },
                weights: &[(Nature, 3), (Wellness, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "ארוחת בוקר עשירה בשוק מקומי",
                    en: "A generous breakfast at a local market",
                },
                weights: &[(Culinary, 3), (History, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "שיעור יוגה מול הנוף",
                    en: "A yoga session facing the view",
                },
                weights: &[(Wellness, 3), (Nature, 1)],
            },
        ],
    },
    QuizQuestion {
        id: "team-energy",
        text: Localized {
            he: "מה הכי מאפיין את האנרגיה בצוות?",
            en: "What best describes your team's energy?",
        },
        answers: &[
            AnswerOption {
                text: Localized {
                    he: "תחרותיים, אוהבים לנצח",
                    en: "Competitive, we like to win",
                },
                weights: &[(Sports, 3), (TeamBuilding, 2)],
            },
            AnswerOption {
                text: Localized {
                    he: "סקרנים, שואלים המון שאלות",
                    en: "Curious, always asking questions",
                },
                weights: &[(History, 3), (Creative, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "יצירתיים ומלאי רעיונות",
                    en: "Creative and full of ideas",
                },
                weights: &[(Creative, 3), (TeamBuilding, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "רגועים, צריכים לנשום",
                    en: "Laid back, we need a breather",
                },
                weights: &[(Wellness, 3)],
            },
        ],
    },
    QuizQuestion {
        id: "perfect-photo",
        text: Localized {
            he: "איזו תמונה הייתם רוצים לקחת הביתה?",
            en: "Which photo would you take home?",
        },
        answers: &[
            AnswerOption {
                text: Localized {
                    he: "כל הצוות תלוי על חבל בסנפלינג",
                    en: "The whole team hanging on a rappel rope",
                },
                weights: &[(Adventure, 3), (TeamBuilding, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "שקיעה מעל המכתש",
                    en: "Sunset over the crater",
                },
                weights: &[(Nature, 3)],
            },
            AnswerOption {
                text: Localized {
                    he: "חומות העיר העתיקה",
                    en: "The walls of the old city",
                },
                weights: &[(History, 3)],
            },
            AnswerOption {
                text: Localized {
                    he: "שולחן ארוך עמוס אוכל ויין",
                    en: "A long table full of food and wine",
                },
                weights: &[(Culinary, 3), (TeamBuilding, 1)],
            },
        ],
    },
    QuizQuestion {
        id: "free-hour",
        text: Localized {
            he: "יש לכם שעה פנויה באמצע היום. מה עושים?",
            en: "You have a free hour mid-day. What do you do?",
        },
        answers: &[
            AnswerOption {
                text: Localized {
                    he: "רוכבים על אופניים",
                    en: "Go for a bike ride",
                },
                weights: &[(Sports, 3), (Nature, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "סדנת קדרות או ציור",
                    en: "A pottery or painting workshop",
                },
                weights: &[(Creative, 3)],
            },
            AnswerOption {
                text: Localized {
                    he: "טעימות ביקב בוטיק",
                    en: "A tasting at a boutique winery",
                },
                weights: &[(Culinary, 3), (Wellness, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "מסאז' ושקט",
                    en: "A massage and some quiet",
                },
                weights: &[(Wellness, 3)],
            },
        ],
    },
    QuizQuestion {
        id: "team-goal",
        text: Localized {
            he: "מה המטרה העיקרית של היום?",
            en: "What is the main goal of the day?",
        },
        answers: &[
            AnswerOption {
                text: Localized {
                    he: "לחזק את הגיבוש והאמון",
                    en: "Strengthen bonding and trust",
                },
                weights: &[(TeamBuilding, 3)],
            },
            AnswerOption {
                text: Localized {
                    he: "לצאת מאזור הנוחות",
                    en: "Get out of our comfort zone",
                },
                weights: &[(Adventure, 3), (Sports, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "ללמוד משהו חדש",
                    en: "Learn something new",
                },
                weights: &[(History, 2), (Creative, 2)],
            },
            AnswerOption {
                text: Localized {
                    he: "להטעין מצברים",
                    en: "Recharge our batteries",
                },
                weights: &[(Wellness, 2), (Nature, 2)],
            },
        ],
    },
    QuizQuestion {
        id: "challenge-level",
        text: Localized {
            he: "כמה מאתגר היום צריך להיות?",
            en: "How challenging should the day be?",
        },
        answers: &[
            AnswerOption {
                text: Localized {
                    he: "כמה שיותר, אנחנו רוצים להזיע",
                    en: "As much as possible, we want to sweat",
                },
                weights: &[(Sports, 3), (Adventure, 2)],
            },
            AnswerOption {
                text: Localized {
                    he: "קצת אקשן אבל עם הפסקות",
                    en: "Some action with breaks",
                },
                weights: &[(Adventure, 1), (Nature, 2)],
            },
            AnswerOption {
                text: Localized {
                    he: "אתגר מחשבתי ולא פיזי",
                    en: "A mental challenge rather than a physical one",
                },
                weights: &[(TeamBuilding, 2), (History, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "בלי מאמץ בכלל",
                    en: "No effort at all",
                },
                weights: &[(Wellness, 2), (Culinary, 2)],
            },
        ],
    },
    QuizQuestion {
        id: "souvenir",
        text: Localized {
            he: "איזו מזכרת תשמחו לקבל?",
            en: "Which souvenir would you love to get?",
        },
        answers: &[
            AnswerOption {
                text: Localized {
                    he: "יצירה שהכנו בעצמנו",
                    en: "Something we made ourselves",
                },
                weights: &[(Creative, 3), (TeamBuilding, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "בקבוק שמן זית או יין מקומי",
                    en: "A bottle of local olive oil or wine",
                },
                weights: &[(Culinary, 3)],
            },
            AnswerOption {
                text: Localized {
                    he: "מדליה מהמרוץ",
                    en: "A medal from the race",
                },
                weights: &[(Sports, 3)],
            },
            AnswerOption {
                text: Localized {
                    he: "מפה עתיקה של האזור",
                    en: "An antique map of the area",
                },
                weights: &[(History, 3), (Adventure, 1)],
            },
        ],
    },
    QuizQuestion {
        id: "day-ending",
        text: Localized {
            he: "איך הכי כיף לסיים את היום?",
            en: "What is the best way to end the day?",
        },
        answers: &[
            AnswerOption {
                text: Localized {
                    he: "מדורה וסיפורים מתחת לכוכבים",
                    en: "A campfire and stories under the stars",
                },
                weights: &[(Nature, 2), (TeamBuilding, 2)],
            },
            AnswerOption {
                text: Localized {
                    he: "ארוחת שף חגיגית",
                    en: "A festive chef's dinner",
                },
                weights: &[(Culinary, 3)],
            },
            AnswerOption {
                text: Localized {
                    he: "הופעה או ג'אם מוזיקלי",
                    en: "A show or a music jam",
                },
                weights: &[(Creative, 2), (Wellness, 1)],
            },
            AnswerOption {
                text: Localized {
                    he: "סיור לילי בסמטאות העתיקות",
                    en: "A night tour of the old alleys",
                },
                weights: &[(History, 3), (Adventure, 1)],
            },
        ],
    },
];
