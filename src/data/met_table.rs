use crate::models::activity::{Activity, Intensity};

/// WHO weekly target for moderate-to-vigorous activity.
pub const WHO_WEEKLY_MET_MINUTES: f64 = 500.0;

/// Volume at which additional health benefits are expected.
pub const WHO_ADDITIONAL_BENEFIT_MET_MINUTES: f64 = 1000.0;

/// Prescription catalog in resolution order: light, moderate, vigorous.
pub static MET_ACTIVITIES: &[Activity] = &[
    Activity {
        name: "緩慢走路",
        intensity: Intensity::Light,
        met_value: 2.0,
        examples: &["漫步", "輕鬆散步", "購物走路"],
    },
    Activity {
        name: "輕度家務",
        intensity: Intensity::Light,
        met_value: 2.5,
        examples: &["洗碗", "整理房間", "烹飪"],
    },
    Activity {
        name: "伸展運動",
        intensity: Intensity::Light,
        met_value: 2.3,
        examples: &["瑜伽伸展", "太極", "簡單拉筋"],
    },
    Activity {
        name: "辦公室工作",
        intensity: Intensity::Light,
        met_value: 1.8,
        examples: &["打字", "閱讀", "會議"],
    },
    Activity {
        name: "快走",
        intensity: Intensity::Moderate,
        met_value: 3.5,
        examples: &["健走", "快速步行", "爬樓梯"],
    },
    Activity {
        name: "騎自行車(休閒)",
        intensity: Intensity::Moderate,
        met_value: 4.0,
        examples: &["平地騎車", "休閒單車", "通勤騎車"],
    },
    Activity {
        name: "游泳(輕鬆)",
        intensity: Intensity::Moderate,
        met_value: 4.5,
        examples: &["蛙式慢游", "水中走路", "水中有氧"],
    },
    Activity {
        name: "舞蹈",
        intensity: Intensity::Moderate,
        met_value: 4.8,
        examples: &["社交舞", "有氧舞蹈", "廣場舞"],
    },
    Activity {
        name: "網球(雙打)",
        intensity: Intensity::Moderate,
        met_value: 5.0,
        examples: &["雙打網球", "羽毛球雙打", "桌球"],
    },
    Activity {
        name: "跑步",
        intensity: Intensity::Vigorous,
        met_value: 8.0,
        examples: &["慢跑", "中速跑步", "間歇跑"],
    },
    Activity {
        name: "騎自行車(快速)",
        intensity: Intensity::Vigorous,
        met_value: 8.5,
        examples: &["競速騎車", "山地車", "高強度騎車"],
    },
    Activity {
        name: "游泳(快速)",
        intensity: Intensity::Vigorous,
        met_value: 10.0,
        examples: &["自由式", "蝶式", "競技游泳"],
    },
    Activity {
        name: "籃球",
        intensity: Intensity::Vigorous,
        met_value: 6.5,
        examples: &["全場籃球", "激烈對戰", "比賽"],
    },
    Activity {
        name: "重量訓練",
        intensity: Intensity::Vigorous,
        met_value: 6.0,
        examples: &["高強度重訓", "CrossFit", "功能性訓練"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_sits_inside_its_intensity_band() {
        for activity in MET_ACTIVITIES {
            assert_eq!(
                Intensity::from_met(activity.met_value),
                Some(activity.intensity),
                "{} is tagged {} but has {} METs",
                activity.name,
                activity.intensity,
                activity.met_value
            );
        }
    }

    #[test]
    fn catalog_is_grouped_light_to_vigorous() {
        let order: Vec<Intensity> = MET_ACTIVITIES.iter().map(|a| a.intensity).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }
}
