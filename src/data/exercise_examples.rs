/// Concrete examples shown for each exercise type named in a personal plan.
pub static EXERCISE_EXAMPLES: &[(&str, &[&str])] = &[
    ("有氧運動", &["快走", "游泳", "騎腳踏車", "爬樓梯", "健走"]),
    ("阻力訓練", &["彈力帶運動", "輕重量啞鈴", "徒手肌力訓練", "阻力機器"]),
    ("肌力訓練", &["伏地挺身", "深蹲", "仰臥起坐", "啞鈴訓練"]),
    ("平衡訓練", &["單腳站立", "太極", "瑜珈", "平衡墊運動"]),
    ("柔軟度訓練", &["伸展運動", "瑜珈", "太極", "關節活動度運動"]),
    ("水中運動", &["水中走路", "水中有氧", "游泳", "水中太極"]),
    ("太極", &["太極拳", "太極劍", "八段錦", "五禽戲"]),
    ("自由遊戲", &["捉迷藏", "跳房子", "踢毽子", "跳繩", "騎腳踏車"]),
    ("體能遊戲", &["老鷹捉小雞", "紅綠燈遊戲", "障礙賽跑", "接力賽"]),
    ("基礎運動技能", &["拋接球", "踢球", "跳躍", "攀爬", "平衡走"]),
    ("團體運動", &["籃球", "足球", "排球", "羽毛球", "桌球"]),
    ("專項技能訓練", &["技術動作練習", "戰術訓練", "專項體能", "競技技巧"]),
    ("競技表現提升", &["速度訓練", "爆發力訓練", "耐力提升", "技術精進"]),
    ("專項訓練", &["專業指導訓練", "競技準備", "表現分析", "恢復訓練"]),
    ("跌倒預防", &["平衡練習", "肌力強化", "反應訓練", "步態訓練"]),
];

pub const MAX_EXAMPLES: usize = 8;

pub fn examples_for(exercise_type: &str) -> &'static [&'static str] {
    EXERCISE_EXAMPLES
        .iter()
        .find(|(name, _)| *name == exercise_type)
        .map(|(_, examples)| *examples)
        .unwrap_or(&[])
}
