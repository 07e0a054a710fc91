use crate::models::activity::{ActivityCategory, LibraryActivity, Variation};

macro_rules! variations {
    ($($name:expr => $met:expr),* $(,)?) => {
        &[$(Variation { name: $name, met_value: $met }),*]
    };
}

pub static MET_LIBRARY: &[LibraryActivity] = &[
    LibraryActivity {
        name: "輕度家務",
        category: ActivityCategory::Household,
        met_value: 2.5,
        intensity: "輕度",
        description: "一般室內清潔和整理工作",
        benefits: &["增加日常活動量", "改善功能性體能", "減少久坐時間"],
        considerations: &["注意正確姿勢", "避免過度彎腰", "適時休息"],
        variations: variations!["洗碗" => 2.3, "摺衣服" => 2.0, "整理床鋪" => 2.8, "輕度烹飪" => 2.5],
    },
    LibraryActivity {
        name: "中度家務",
        category: ActivityCategory::Household,
        met_value: 3.5,
        intensity: "中度",
        description: "需要較多體力的家務工作",
        benefits: &["全身肌力訓練", "心肺功能改善", "實用性體能"],
        considerations: &["使用適當工具", "分段進行", "保護腰部"],
        variations: variations!["吸塵" => 3.3, "拖地" => 3.5, "搬運物品" => 4.0, "園藝工作" => 4.0],
    },
    LibraryActivity {
        name: "重度家務",
        category: ActivityCategory::Household,
        met_value: 5.0,
        intensity: "中高度",
        description: "需要大量體力的家務活動",
        benefits: &["肌力大幅提升", "心肺耐力訓練", "功能性動作"],
        considerations: &["充分熱身", "正確搬運技巧", "避免過度負荷"],
        variations: variations!["搬家" => 6.0, "粉刷房屋" => 4.5, "修繕工作" => 5.5, "重型清潔" => 4.8],
    },
    LibraryActivity {
        name: "步行",
        category: ActivityCategory::Transportation,
        met_value: 3.0,
        intensity: "輕中度",
        description: "以步行作為交通方式",
        benefits: &["改善心血管健康", "增強下肢肌力", "環保便利"],
        considerations: &["選擇安全路線", "穿著合適鞋子", "注意交通安全"],
        variations: variations![
            "慢走(2.5km/h)" => 2.3,
            "一般步行(4km/h)" => 3.0,
            "快走(5.5km/h)" => 4.3,
            "競走" => 6.5,
        ],
    },
    LibraryActivity {
        name: "騎自行車",
        category: ActivityCategory::Transportation,
        met_value: 6.0,
        intensity: "中高度",
        description: "騎自行車通勤或休閒",
        benefits: &["心肺耐力提升", "下肢肌力強化", "關節友善運動"],
        considerations: &["配戴安全帽", "檢查車況", "遵守交通規則"],
        variations: variations!["休閒騎車" => 4.0, "通勤騎車" => 6.0, "山地騎車" => 8.5, "競速騎車" => 12.0],
    },
    LibraryActivity {
        name: "爬樓梯",
        category: ActivityCategory::Transportation,
        met_value: 8.0,
        intensity: "高強度",
        description: "使用樓梯代替電梯",
        benefits: &["下肢爆發力", "心肺功能強化", "日常可行性高"],
        considerations: &["扶住扶手", "控制速度", "注意膝關節"],
        variations: variations!["慢速爬樓" => 4.0, "一般速度" => 8.0, "快速爬樓" => 15.0],
    },
    LibraryActivity {
        name: "籃球",
        category: ActivityCategory::Sports,
        met_value: 8.0,
        intensity: "高強度",
        description: "全場籃球比賽或練習",
        benefits: &["全身協調性", "心肺耐力", "團隊合作", "反應速度"],
        considerations: &["充分熱身", "保護關節", "適當休息", "注意碰撞"],
        variations: variations!["投籃練習" => 4.5, "半場籃球" => 6.0, "全場比賽" => 8.0, "激烈對抗" => 10.0],
    },
    LibraryActivity {
        name: "游泳",
        category: ActivityCategory::Sports,
        met_value: 8.0,
        intensity: "中高強度",
        description: "各種泳式的游泳活動",
        benefits: &["全身肌力", "心肺功能", "關節友善", "身體柔軟度"],
        considerations: &["注意水溫", "循序漸進", "學習正確技巧", "安全第一"],
        variations: variations!["漂浮踢水" => 2.5, "慢速蛙式" => 4.5, "自由式" => 8.0, "蝶式" => 13.5],
    },
    LibraryActivity {
        name: "跑步",
        category: ActivityCategory::Sports,
        met_value: 9.0,
        intensity: "高強度",
        description: "各種速度的跑步運動",
        benefits: &["心肺耐力", "下肢肌力", "骨密度", "精神健康"],
        considerations: &["適當鞋具", "漸進增量", "注意路面", "預防運動傷害"],
        variations: variations![
            "慢跑(6km/h)" => 6.0,
            "中速跑(8km/h)" => 8.3,
            "快跑(10km/h)" => 9.8,
            "衝刺" => 15.0,
        ],
    },
    LibraryActivity {
        name: "網球",
        category: ActivityCategory::Sports,
        met_value: 7.0,
        intensity: "中高強度",
        description: "網球比賽和練習",
        benefits: &["手眼協調", "反應時間", "心肺功能", "全身肌力"],
        considerations: &["正確握拍", "場地安全", "適當裝備", "預防網球肘"],
        variations: variations!["雙打" => 5.0, "單打" => 7.0, "競技比賽" => 8.0],
    },
    LibraryActivity {
        name: "舞蹈",
        category: ActivityCategory::Recreation,
        met_value: 4.8,
        intensity: "中度",
        description: "各種形式的舞蹈活動",
        benefits: &["心肺功能", "協調性", "柔軟度", "情緒健康"],
        considerations: &["適當服裝", "安全場地", "循序漸進", "注意平衡"],
        variations: variations!["社交舞" => 3.0, "有氧舞蹈" => 6.0, "芭蕾" => 5.0, "街舞" => 7.0],
    },
    LibraryActivity {
        name: "太極拳",
        category: ActivityCategory::Recreation,
        met_value: 3.0,
        intensity: "輕中度",
        description: "傳統中國武術養生運動",
        benefits: &["平衡能力", "柔軟度", "精神放鬆", "關節活動度"],
        considerations: &["學習正確動作", "專注呼吸", "穩定場地", "避免強迫動作"],
        variations: variations!["24式太極" => 3.0, "42式太極" => 3.5, "太極劍" => 4.0],
    },
    LibraryActivity {
        name: "瑜珈",
        category: ActivityCategory::Recreation,
        met_value: 2.5,
        intensity: "輕度",
        description: "身心靈平衡的伸展運動",
        benefits: &["柔軟度", "核心肌力", "壓力舒緩", "身體覺察"],
        considerations: &["適當墊子", "不強迫動作", "配合呼吸", "避免比較"],
        variations: variations!["哈達瑜珈" => 2.5, "流動瑜珈" => 3.5, "熱瑜珈" => 5.0, "力量瑜珈" => 4.0],
    },
    LibraryActivity {
        name: "重量訓練",
        category: ActivityCategory::Conditioning,
        met_value: 6.0,
        intensity: "中高強度",
        description: "使用器械或自重的肌力訓練",
        benefits: &["肌肉量增加", "骨密度提升", "代謝率改善", "功能性體能"],
        considerations: &["正確技巧", "適當重量", "充分休息", "漸進負荷"],
        variations: variations!["輕重量" => 3.0, "中重量" => 6.0, "大重量" => 8.0, "CrossFit" => 12.0],
    },
    LibraryActivity {
        name: "有氧運動",
        category: ActivityCategory::Conditioning,
        met_value: 7.0,
        intensity: "中高強度",
        description: "持續性的心肺訓練",
        benefits: &["心肺耐力", "脂肪燃燒", "血液循環", "耐力提升"],
        considerations: &["適當強度", "充分水分", "監測心率", "循序漸進"],
        variations: variations!["低強度" => 3.5, "中強度" => 7.0, "高強度" => 11.0, "間歇訓練" => 12.5],
    },
    LibraryActivity {
        name: "伸展運動",
        category: ActivityCategory::Conditioning,
        met_value: 2.3,
        intensity: "輕度",
        description: "靜態和動態伸展活動",
        benefits: &["柔軟度改善", "肌肉放鬆", "關節活動度", "運動恢復"],
        considerations: &["溫和進行", "避免彈震", "持續呼吸", "不過度伸展"],
        variations: variations!["靜態伸展" => 2.3, "動態伸展" => 3.8, "PNF伸展" => 4.0],
    },
    LibraryActivity {
        name: "辦公室工作",
        category: ActivityCategory::Occupational,
        met_value: 1.8,
        intensity: "極輕度",
        description: "坐姿辦公和電腦工作",
        benefits: &["維持基本代謝", "精神工作"],
        considerations: &["定時起身", "正確坐姿", "眼部休息", "活動筋骨"],
        variations: variations!["打字" => 1.8, "會議" => 1.8, "站立辦公" => 2.3],
    },
    LibraryActivity {
        name: "體力勞動",
        category: ActivityCategory::Occupational,
        met_value: 5.5,
        intensity: "中高度",
        description: "需要體力的職業工作",
        benefits: &["職業體能", "實用肌力", "心肺耐力"],
        considerations: &["職業安全", "適當工具", "正確動作", "定期休息"],
        variations: variations!["建築工作" => 5.5, "搬運工作" => 7.0, "農業工作" => 4.5, "清潔工作" => 3.5],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_covers_every_category() {
        for category in ActivityCategory::ALL {
            assert!(
                MET_LIBRARY.iter().any(|a| a.category == category),
                "no library entries for {}",
                category.as_str()
            );
        }
        assert_eq!(MET_LIBRARY.len(), 18);
    }

    #[test]
    fn every_entry_lists_variations() {
        assert!(MET_LIBRARY.iter().all(|a| !a.variations.is_empty() && a.met_value > 0.0));
    }
}
