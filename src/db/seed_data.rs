//! Starter data written on first run.

use crate::types::MealType;

pub const SETTINGS: &[(&str, &str)] = &[
    ("start_weight", "119"),
    ("target_weight", "99"),
    ("bmr", "2300"),
    ("daily_calories_min", "1800"),
    ("daily_calories_max", "2200"),
    ("protein_target", "180-220"),
    ("whey_brand", "MARS 水解乳清隨手包"),
    ("whey_spec", "35g/包，26g蛋白質"),
];

/// (name, duration, intensity, distance, calories)
pub const EXERCISES: &[(&str, &str, &str, &str, &str)] = &[
    ("快走", "40-50 分鐘", "5.5-6.0 km/h", "3.5-5.0 km", "250-350 kcal"),
    ("飛輪", "30-40 分鐘", "70-85 RPM / 阻力 3-5", "10-15 km", "250-350 kcal"),
    ("游泳", "30-40 分鐘", "休閒配速", "800-1200 m", "300-400 kcal"),
];

pub const MEALS: &[(&str, MealType, &str, i64, i64)] = &[
    (
        "經典雞胸蛋",
        MealType::Breakfast,
        "雞胸肉 200g, 水煮蛋 2顆, 希臘優格 150g, 黑咖啡 1杯",
        495,
        73,
    ),
    (
        "燕麥優格碗",
        MealType::Breakfast,
        "燕麥片 60g, 希臘優格 200g, MARS水解乳清 1包, 藍莓 50g",
        570,
        54,
    ),
    ("蛋白煎餅", MealType::Breakfast, "蛋白 5顆, 全蛋 2顆, 燕麥粉 40g, 希臘優格 150g", 505, 50),
    ("日式早餐", MealType::Breakfast, "鮭魚 150g, 水煮蛋 2顆, 小黃瓜 100g, 味噌湯 1碗", 470, 46),
    (
        "高蛋白奶昔",
        MealType::Breakfast,
        "MARS水解乳清 2包, 無糖豆漿 400ml, 燕麥片 50g, 花生醬 15g",
        690,
        75,
    ),
    (
        "蛋捲+雞胸",
        MealType::Breakfast,
        "全蛋 3顆, 蛋白 2顆, 雞胸肉 150g, 菠菜 80g, 起司絲 20g",
        505,
        67,
    ),
    (
        "希臘優格碗",
        MealType::Breakfast,
        "希臘優格 300g, MARS水解乳清 1包, 堅果 20g, 黑咖啡 1杯",
        525,
        60,
    ),
    // lunch
    ("雞胸便當", MealType::Lunch, "糙米飯 180g, 雞胸肉 350g, 青花菜 250g, 橄欖油 1湯匙", 790, 92),
    ("鮭魚餐", MealType::Lunch, "地瓜 200g, 鮭魚 250g, 蘆筍 200g, 檸檬汁", 670, 57),
    ("雞腿排餐", MealType::Lunch, "紫米飯 180g, 去骨雞腿排 300g, 四季豆 250g, 蒜頭", 680, 70),
    ("蝦仁炒飯", MealType::Lunch, "糙米飯 180g, 蝦仁 300g, 蛋 2顆, 青菜 150g", 725, 83),
    ("牛肉沙拉碗", MealType::Lunch, "瘦牛肉 300g, 綜合生菜 200g, 酪梨 50g, 橄欖油+醋", 660, 74),
    ("鯛魚定食", MealType::Lunch, "糙米飯 180g, 鯛魚 350g, 味噌湯 1碗, 燙青菜 200g", 640, 89),
    (
        "雞肉蔬菜咖哩",
        MealType::Lunch,
        "花椰菜米 250g, 雞胸肉 350g, 咖哩粉+椰奶, 蔬菜丁 150g",
        610,
        90,
    ),
    ("墨西哥雞肉碗", MealType::Lunch, "糙米飯 150g, 雞胸肉絲 350g, 黑豆 50g, 酪梨+莎莎醬", 710, 91),
    ("豆腐雞肉鍋", MealType::Lunch, "板豆腐 250g, 雞胸肉 300g, 蔬菜 350g, 蛋 2顆", 860, 106),
    ("牛肉燴飯", MealType::Lunch, "糙米飯 180g, 牛腱肉 300g, 洋蔥+蘑菇, 青菜 150g", 732, 78),
    ("豬里肌便當", MealType::Lunch, "糙米飯 180g, 豬里肌 300g, 青花菜 200g, 蒜炒", 720, 75),
    // dinner
    ("清蒸雞胸", MealType::Dinner, "雞胸肉 350g, 花椰菜 250g, 水煮蛋 1顆", 545, 93),
    ("烤鮭魚", MealType::Dinner, "鮭魚 300g, 蘆筍 250g, 小番茄 100g", 610, 66),
    ("蒜香蝦", MealType::Dinner, "蝦仁 350g, 青花菜 250g, 蒜頭+橄欖油", 555, 82),
    ("雞肉沙拉", MealType::Dinner, "雞胸肉 350g, 綜合生菜 250g, 酪梨 50g, 水煮蛋 1顆", 620, 90),
    ("鯛魚清蒸", MealType::Dinner, "鯛魚 400g, 薑絲+蔥花, 菠菜 250g", 482, 96),
    ("豆腐雞肉", MealType::Dinner, "雞胸肉 300g, 板豆腐 250g, 青菜 250g", 605, 94),
    ("牛肉蔬菜", MealType::Dinner, "瘦牛肉 350g, 甜椒 150g, 洋蔥+蘑菇", 637, 86),
    ("蛋白歐姆蛋", MealType::Dinner, "蛋白 8顆, 全蛋 2顆, 雞胸肉丁 250g, 蔬菜丁+起司", 695, 107),
    ("韓式泡菜雞", MealType::Dinner, "雞胸肉 350g, 泡菜 150g, 豆腐 150g, 蛋 1顆", 604, 101),
    ("牛排蔬菜", MealType::Dinner, "牛排 350g, 櫛瓜 200g, 番茄+蘑菇", 617, 87),
    ("蒜香豬排", MealType::Dinner, "豬里肌 350g, 蒜片, 青花菜 250g", 580, 82),
];

/// (name, category, brand, spec, price, weekly_amount, note)
pub const SHOPPING: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "雞胸肉（生）",
        "protein",
        "卜蜂 Betagro",
        "2.5kg/包（6塊裝，冷凍區）",
        "NT$ 350-400",
        "3包",
        "每餐1塊約400g，藍色包裝",
    ),
    (
        "雞腿排（去骨）",
        "protein",
        "卜蜂 Betagro",
        "2kg/包（冷凍區）",
        "NT$ 380-420",
        "1包",
        "綠色包裝，變化用",
    ),
    (
        "牛肋條/牛腱",
        "protein",
        "美國 USDA Choice",
        "1.5kg/包（冷凍區）",
        "NT$ 650-800",
        "1包",
        "紅肉補鐵",
    ),
    (
        "牛絞肉（瘦）",
        "protein",
        "美國 USDA",
        "2kg/包（冷凍區）",
        "NT$ 550-650",
        "0.5包",
        "快速料理",
    ),
    ("豬里肌肉", "protein", "台灣豬", "2kg/包（冷藏區）", "NT$ 350-450", "1包", "最瘦，適合煎炒"),
    ("豬腰內肉", "protein", "台灣豬", "1kg/包（冷藏區）", "NT$ 300-400", "0.5包", "超瘦，口感嫩"),
    (
        "鮭魚輪切",
        "protein",
        "智利/挪威",
        "1kg/包（冷凍區）",
        "NT$ 550-650",
        "0.5包",
        "Omega-3 來源",
    ),
    ("鯛魚片", "protein", "台灣養殖", "1kg/包（冷凍區）", "NT$ 350-400", "0.5包", "低脂白肉魚"),
    ("蝦仁", "protein", "Kirkland", "908g/包（冷凍區）", "NT$ 450-500", "0.5包", "紅袋裝，變化用"),
    ("水煮蛋", "protein", "Kirkland", "20入/盒（冷藏區）", "NT$ 159", "2盒", "方便即食，透明盒裝"),
    ("雞蛋", "protein", "勤億或大成", "30入/盒（冷藏區）", "NT$ 180-220", "1盒", "自己煮更省"),
    (
        "希臘優格",
        "protein",
        "Kirkland 或 Chobani",
        "1kg/罐（冷藏區）",
        "NT$ 250-280",
        "2罐",
        "原味無糖，高蛋白",
    ),
    ("無糖豆漿", "protein", "義美", "1.8L×2（冷藏區）", "NT$ 99", "1組", "植物蛋白補充"),
    // vegetable
    (
        "青花菜",
        "vegetable",
        "Kirkland 冷凍",
        "1.2kg/包（冷凍區）",
        "NT$ 180-220",
        "2包",
        "主要蔬菜",
    ),
    (
        "花椰菜米",
        "vegetable",
        "Kirkland",
        "1.36kg/包（冷凍區）",
        "NT$ 250-280",
        "1包",
        "低碳主食替代",
    ),
    ("四季豆", "vegetable", "Kirkland 冷凍", "907g/包（冷凍區）", "NT$ 150-180", "1包", "綠色包裝"),
    ("菠菜", "vegetable", "Kirkland 冷凍", "454g×2（冷凍區）", "NT$ 180-200", "1組", ""),
    ("綜合生菜", "vegetable", "新鮮區", "454g/盒（冷藏區）", "NT$ 150-180", "2包", "沙拉用"),
    ("小黃瓜", "vegetable", "新鮮區", "6入/袋", "NT$ 80-100", "2包", ""),
    ("番茄", "vegetable", "新鮮區", "1kg/盒", "NT$ 120-150", "1盒", ""),
    // carb
    ("糙米", "carb", "中興米", "4kg/袋", "NT$ 280-320", "0.25袋", "主要碳水來源"),
    ("紫米", "carb", "台灣在地", "1kg/包", "NT$ 150-180", "0.5包", "混合糙米"),
    ("燕麥片", "carb", "Quaker 桂格", "2.26kg/罐（大罐裝）", "NT$ 280-320", "0.5罐", "早餐選擇"),
    ("地瓜", "carb", "新鮮區", "2kg/袋", "NT$ 150-180", "1袋", "訓練日碳水"),
    // oil
    ("橄欖油", "oil", "Kirkland 特級初榨", "2L/瓶", "NT$ 550-650", "0.1瓶", "拌沙拉用，綠色瓶"),
    ("酪梨油", "oil", "Chosen Foods", "1L/瓶", "NT$ 400-500", "0.1瓶", "高溫烹調用"),
    ("無調味堅果", "oil", "Kirkland", "1.13kg/罐", "NT$ 550-650", "0.25罐", "每天一小把"),
    // supplement
    (
        "水解乳清隨手包",
        "supplement",
        "MARS 戰神",
        "35g/包（26g蛋白質）",
        "NT$ 50-60/包",
        "每日1-2包",
        "網購/健身房購買，非好市多",
    ),
    ("綜合維他命", "supplement", "Kirkland", "200錠/瓶", "NT$ 600-800", "1瓶/80天", "營養補充"),
    ("魚油", "supplement", "Kirkland", "180顆/瓶", "NT$ 700-900", "1瓶/80天", "Omega-3"),
    // drink
    ("黑咖啡", "drink", "Kirkland 即溶/濾掛", "依個人喜好", "NT$ 300-500", "每日1杯", "早餐必備"),
];
