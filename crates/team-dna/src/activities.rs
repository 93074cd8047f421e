//! Activity catalogue with per-activity category profiles.
//!
//! Keys are the activity descriptions used on the site. The matcher tokenises them, so keep
//! them descriptive: every token of four or more letters becomes a chat trigger.

use crate::model::ActivityDna;
use crate::model::Category::{
    Adventure, Creative, Culinary, History, Nature, Sports, TeamBuilding, Wellness,
};

pub static ACTIVITY_DNA: &[ActivityDna] = &[
    ActivityDna {
        activity: "טיול ג'יפים ברמת הגולן",
        weights: &[(Adventure, 5), (Nature, 3), (TeamBuilding, 1)],
    },
    ActivityDna {
        activity: "סנפלינג במצוקי הכרמל",
        weights: &[(Adventure, 5), (Sports, 3), (TeamBuilding, 2)],
    },
    ActivityDna {
        activity: "קיאקים בנהר הירדן",
        weights: &[(Sports, 4), (Nature, 3), (Adventure, 2)],
    },
    ActivityDna {
        activity: "רכיבת אופניים בעמק החולה",
        weights: &[(Sports, 4), (Nature, 3)],
    },
    ActivityDna {
        activity: "מסלול מעיינות בעמק המעיינות",
        weights: &[(Nature, 5), (Wellness, 2)],
    },
    ActivityDna {
        activity: "תצפית שקיעה במכתש רמון",
        weights: &[(Nature, 4), (Wellness, 3), (Adventure, 1)],
    },
    ActivityDna {
        activity: "סיור בעיר העתיקה בירושלים",
        weights: &[(History, 5), (Culinary, 1)],
    },
    ActivityDna {
        activity: "מצדה וים המלח",
        weights: &[(History, 4), (Nature, 2), (Wellness, 2)],
    },
    ActivityDna {
        activity: "חפירה ארכיאולוגית בבית גוברין",
        weights: &[(History, 5), (TeamBuilding, 2), (Creative, 1)],
    },
    ActivityDna {
        activity: "סדנת בישול בשוק מחנה יהודה",
        weights: &[(Culinary, 5), (TeamBuilding, 3), (Creative, 2)],
    },
    ActivityDna {
        activity: "טעימות יין ביקבי הגליל",
        weights: &[(Culinary, 4), (Wellness, 2)],
    },
    ActivityDna {
        activity: "סדנת קדרות וציור בעין הוד",
        weights: &[(Creative, 5), (Wellness, 2)],
    },
    ActivityDna {
        activity: "ג'אם תופים קבוצתי",
        weights: &[(Creative, 4), (TeamBuilding, 4)],
    },
    ActivityDna {
        activity: "יוגה וספא בחוף הכנרת",
        weights: &[(Wellness, 5), (Nature, 2)],
    },
    ActivityDna {
        activity: "משחק משימות וניווט בצוותים",
        weights: &[(TeamBuilding, 5), (Adventure, 2), (Sports, 2)],
    },
    ActivityDna {
        activity: "בניית רפסודות על הכנרת",
        weights: &[(TeamBuilding, 5), (Sports, 3), (Creative, 2)],
    },
];
