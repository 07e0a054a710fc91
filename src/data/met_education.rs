//! MET reference text: the full introduction and the short prescription explanation.

use crate::models::activity::Intensity;
use crate::models::education::{IntensityBand, MetExplanation, MetIntroduction, Topic};
use crate::models::guideline::Note;

pub static MET_INTRODUCTION: MetIntroduction = MetIntroduction {
    basic_concepts: &[
        Note {
            label: "定義",
            text: "MET (Metabolic Equivalent of Task) 代謝當量，是測量身體活動能量消耗的標準化單位。\
                   1 MET 定義為一個人在安靜坐著時的代謝率，約等於每公斤體重每分鐘消耗3.5毫升氧氣 (3.5 ml O2/kg/min)。",
        },
        Note {
            label: "歷史背景",
            text: "MET概念由美國運動醫學會(ACSM)在1960年代提出，目的是提供一個標準化的方式來比較不同活動的強度。\
                   現在廣泛用於運動處方、健康指導和研究領域。",
        },
        Note {
            label: "計算原理",
            text: "MET值 = 活動時代謝率 ÷ 安靜代謝率\n例如：跑步時代謝率為28 ml O2/kg/min，則MET = 28 ÷ 3.5 = 8 METs",
        },
    ],
    intensity_classes: &[
        IntensityBand {
            intensity: Intensity::Light,
            label: "輕度活動 (Light)",
            met_range: "1.6 - 2.9 METs",
            signs: "呼吸和心率輕微增加，可以輕鬆唱歌",
            feel: "感覺輕鬆，幾乎沒有疲勞感",
            examples: "緩慢走路、輕度家務、辦公室工作",
        },
        IntensityBand {
            intensity: Intensity::Moderate,
            label: "中度活動 (Moderate)",
            met_range: "3.0 - 5.9 METs",
            signs: "呼吸和心率明顯增加，可以說話但無法唱歌",
            feel: "有點累但舒適，輕微出汗",
            examples: "快走、騎自行車、游泳、舞蹈",
        },
        IntensityBand {
            intensity: Intensity::Vigorous,
            label: "高強度活動 (Vigorous)",
            met_range: "≥ 6.0 METs",
            signs: "呼吸急促，心率大幅增加，只能說幾個字",
            feel: "明顯疲勞，大量出汗",
            examples: "跑步、競技運動、高強度訓練",
        },
    ],
    applications: &[
        Topic {
            topic: "熱量計算",
            points: &[
                Note { label: "公式", text: "消耗熱量(大卡) = MET值 × 體重(公斤) × 運動時間(小時)" },
                Note { label: "範例", text: "70公斤的人快走(3.5 METs)30分鐘 = 3.5 × 70 × 0.5 = 122.5大卡" },
            ],
        },
        Topic {
            topic: "運動處方",
            points: &[
                Note { label: "WHO建議", text: "成人每週至少500 MET-分鐘的中高強度活動" },
                Note { label: "計算方式", text: "MET值 × 運動時間(分鐘) = MET-分鐘" },
                Note { label: "達標例子", text: "快走30分鐘 × 5天 = 3.5 × 150 = 525 MET-分鐘/週" },
            ],
        },
        Topic {
            topic: "健康效益",
            points: &[
                Note { label: "心血管", text: "中度活動(3-6 METs)改善心肺功能" },
                Note { label: "代謝", text: "高強度活動(>6 METs)提升代謝率" },
                Note { label: "體重控制", text: "根據MET值精確計算熱量消耗" },
            ],
        },
    ],
    usage_notes: &[
        Note { label: "個體差異", text: "年齡、性別、體能狀況會影響實際能量消耗" },
        Note { label: "環境因素", text: "溫度、濕度、海拔高度會影響MET值" },
        Note { label: "測量限制", text: "MET值為平均值，個人差異可達±20%" },
        Note { label: "安全考量", text: "初學者應從低MET活動開始，循序漸進" },
    ],
};

pub static MET_EXPLANATION: MetExplanation = MetExplanation {
    definition: "MET (Metabolic Equivalent of Task) 代表代謝當量，是衡量身體活動強度的標準單位。\
                 1 MET = 安靜時的能量消耗 (約每公斤體重每分鐘消耗3.5毫升氧氣)",
    intensity_levels: &[
        Note { label: "輕度活動", text: "1.6-2.9 METs - 可以唱歌的程度" },
        Note { label: "中度活動", text: "3.0-5.9 METs - 可以說話但無法唱歌" },
        Note { label: "高強度活動", text: "≥6.0 METs - 只能說少數字詞" },
    ],
    practical_uses: "利用MET值可以：1) 比較不同活動的強度 2) 計算卡路里消耗 3) 制定個人化運動處方 4) 監測運動進展",
    prescription_guidance: &[
        Note { label: "成人建議", text: "每週累積500-1000 MET-分鐘的中高強度活動" },
        Note { label: "計算方式", text: "MET值 × 運動時間(分鐘) = MET-分鐘" },
        Note { label: "實例", text: "快走(3.5 METs) × 30分鐘 = 105 MET-分鐘" },
    ],
};
