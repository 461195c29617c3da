//! Static statistics tables shown by the dashboard.

/// `(name, gdp, population, growth, industry, temperature, aqi)`
pub(crate) type StatsRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

/// `(name, value, packed 0xRRGGBB color)`
pub(crate) const BARS: &[(&str, u32, u32)] = &[
    ("北京市", 100, 0xFF0000),
    ("上海市", 90, 0x00FF00),
    ("深圳市", 85, 0x0000FF),
    ("成都市", 80, 0xFF00FF),
    ("武汉市", 75, 0xFFFF00),
    ("西安市", 70, 0x00FFFF),
    ("广州市", 88, 0xFFAA00),
    ("杭州市", 82, 0x00AAFF),
    ("南京市", 78, 0xAA00FF),
    ("重庆市", 85, 0xFF00AA),
];

/// Fallback bar colors.
pub(crate) const BAR_PALETTE: [u32; 8] = [
    0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0x00FFFF, 0xFF00FF, 0xFFAA00, 0x00AAFF,
];

/// Industries drawn for regions without static statistics.
pub(crate) const INDUSTRIES: [&str; 8] = [
    "制造业",
    "服务业",
    "农业",
    "旅游业",
    "科技产业",
    "商贸",
    "物流",
    "文化产业",
];

/// `(short name, value, code)` for the national overview.
pub(crate) const PROVINCE_SUMMARIES: &[(&str, u32, &str)] = &[
    ("北京", 2154, "BJ"),
    ("天津", 1562, "TJ"),
    ("河北", 7591, "HE"),
    ("山西", 3718, "SX"),
    ("内蒙古", 2534, "NM"),
    ("辽宁", 4351, "LN"),
    ("吉林", 2704, "JL"),
    ("黑龙江", 3773, "HL"),
    ("上海", 2487, "SH"),
    ("江苏", 8477, "JS"),
    ("浙江", 6468, "ZJ"),
    ("安徽", 6324, "AH"),
    ("福建", 4154, "FJ"),
    ("江西", 4666, "JX"),
    ("山东", 10006, "SD"),
    ("河南", 9605, "HA"),
    ("湖北", 5927, "HB"),
    ("湖南", 6899, "HN"),
    ("广东", 12601, "GD"),
    ("广西", 4873, "GX"),
    ("海南", 973, "HI"),
    ("重庆", 3212, "CQ"),
    ("四川", 8367, "SC"),
    ("贵州", 3623, "GZ"),
    ("云南", 4720, "YN"),
    ("西藏", 365, "XZ"),
    ("陕西", 3864, "SN"),
    ("甘肃", 2637, "GS"),
    ("青海", 603, "QH"),
    ("宁夏", 720, "NX"),
    ("新疆", 2523, "XJ"),
];

/// Province-level statistics.
pub(crate) const PROVINCES: &[StatsRow] = &[
    ("北京市", "4.16万亿", "2189万", "+5.2%", "服务业", "15°C", "良 68"),
    ("上海市", "4.32万亿", "2487万", "+5.5%", "金融业", "18°C", "优 45"),
    ("广东省", "12.91万亿", "1.27亿", "+4.8%", "制造业", "25°C", "良 72"),
    ("江苏省", "11.64万亿", "8505万", "+5.8%", "制造业", "16°C", "良 65"),
    ("浙江省", "7.35万亿", "6577万", "+6.0%", "数字经济", "17°C", "优 52"),
    ("山东省", "8.31万亿", "1.01亿", "+5.5%", "重工业", "14°C", "良 78"),
    ("河南省", "5.88万亿", "9872万", "+4.3%", "农业", "15°C", "良 82"),
    ("四川省", "5.38万亿", "8372万", "+4.2%", "电子信息", "16°C", "优 58"),
    ("湖北省", "5.01万亿", "5844万", "+5.3%", "汽车制造", "17°C", "良 70"),
    ("湖南省", "4.60万亿", "6622万", "+4.5%", "工程机械", "18°C", "良 75"),
    ("福建省", "4.88万亿", "4188万", "+5.0%", "电子信息", "20°C", "优 48"),
    ("安徽省", "4.29万亿", "6127万", "+5.2%", "新能源", "16°C", "良 68"),
    ("河北省", "3.98万亿", "7448万", "+3.8%", "钢铁", "13°C", "良 85"),
    ("陕西省", "2.98万亿", "3956万", "+4.3%", "能源化工", "14°C", "良 72"),
    ("江西省", "2.75万亿", "4518万", "+4.7%", "有色金属", "18°C", "优 55"),
    ("辽宁省", "2.75万亿", "4229万", "+3.0%", "装备制造", "10°C", "良 78"),
    ("重庆市", "2.73万亿", "3213万", "+6.1%", "汽车制造", "17°C", "良 68"),
    ("云南省", "2.72万亿", "4721万", "+4.4%", "旅游业", "16°C", "优 42"),
    ("广西壮族自治区", "2.52万亿", "5037万", "+4.1%", "有色金属", "22°C", "优 50"),
    ("山西省", "2.19万亿", "3481万", "+4.0%", "煤炭", "12°C", "良 88"),
    ("内蒙古自治区", "2.16万亿", "2400万", "+4.2%", "能源", "8°C", "良 75"),
    ("贵州省", "1.92万亿", "3852万", "+4.8%", "大数据", "15°C", "优 45"),
    ("新疆维吾尔自治区", "1.60万亿", "2589万", "+5.1%", "石油化工", "12°C", "良 70"),
    ("天津市", "1.57万亿", "1363万", "+4.0%", "先进制造", "14°C", "良 80"),
    ("黑龙江省", "1.50万亿", "3099万", "+2.6%", "农业", "5°C", "优 58"),
    ("吉林省", "1.29万亿", "2347万", "+3.2%", "汽车", "8°C", "良 72"),
    ("甘肃省", "1.02万亿", "2492万", "+4.5%", "有色金属", "11°C", "良 68"),
    ("海南省", "0.64万亿", "1008万", "+9.2%", "旅游业", "26°C", "优 35"),
    ("宁夏回族自治区", "0.47万亿", "725万", "+5.3%", "能源化工", "10°C", "良 75"),
    ("青海省", "0.33万亿", "595万", "+2.3%", "清洁能源", "6°C", "优 40"),
    ("西藏自治区", "0.21万亿", "364万", "+9.5%", "旅游业", "8°C", "优 30"),
    ("香港特别行政区", "2.86万亿", "741万", "+3.2%", "金融服务", "24°C", "良 62"),
    ("澳门特别行政区", "0.36万亿", "68万", "+80.5%", "博彩旅游", "23°C", "良 58"),
    ("台湾省", "4.20万亿", "2345万", "+2.9%", "半导体", "22°C", "良 65"),
];

/// City-level statistics, including the districts of the municipalities.
pub(crate) const CITIES: &[StatsRow] = &[
    ("东城区", "3200亿", "79万", "+5.5%", "金融服务", "15°C", "良 65"),
    ("西城区", "5100亿", "110万", "+5.8%", "金融服务", "15°C", "良 68"),
    ("朝阳区", "7000亿", "345万", "+6.2%", "商务服务", "15°C", "良 70"),
    ("海淀区", "9500亿", "348万", "+7.5%", "科技创新", "14°C", "良 62"),
    ("黄浦区", "2800亿", "65万", "+5.2%", "金融商贸", "18°C", "优 45"),
    ("浦东新区", "13500亿", "568万", "+7.8%", "金融科技", "18°C", "优 48"),
    ("徐汇区", "2200亿", "108万", "+5.5%", "科技服务", "18°C", "优 42"),
    ("广州市", "2.88万亿", "1868万", "+5.2%", "商贸服务", "25°C", "良 68"),
    ("深圳市", "3.24万亿", "1768万", "+6.0%", "科技创新", "26°C", "优 52"),
    ("珠海市", "3800亿", "244万", "+5.8%", "高端制造", "25°C", "优 45"),
    ("佛山市", "1.27万亿", "955万", "+5.5%", "制造业", "25°C", "良 72"),
    ("东莞市", "1.12万亿", "1047万", "+5.1%", "电子制造", "25°C", "良 70"),
    ("南京市", "1.69万亿", "942万", "+5.8%", "科技服务", "16°C", "良 65"),
    ("苏州市", "2.40万亿", "1275万", "+5.6%", "制造业", "16°C", "良 68"),
    ("无锡市", "1.49万亿", "749万", "+5.5%", "制造业", "16°C", "良 70"),
    ("常州市", "9500亿", "536万", "+5.2%", "装备制造", "16°C", "良 72"),
    ("杭州市", "1.87万亿", "1237万", "+6.5%", "数字经济", "17°C", "优 50"),
    ("宁波市", "1.57万亿", "954万", "+5.5%", "港口物流", "17°C", "优 48"),
    ("温州市", "8000亿", "967万", "+5.0%", "轻工制造", "18°C", "优 52"),
    ("济南市", "1.20万亿", "932万", "+5.5%", "装备制造", "14°C", "良 75"),
    ("青岛市", "1.49万亿", "1026万", "+5.8%", "海洋经济", "13°C", "优 58"),
    ("烟台市", "9200亿", "710万", "+5.2%", "制造业", "13°C", "优 55"),
    ("成都市", "2.08万亿", "2119万", "+6.0%", "电子信息", "16°C", "良 68"),
    ("绵阳市", "3600亿", "489万", "+4.8%", "电子科技", "15°C", "优 52"),
    ("武汉市", "1.89万亿", "1365万", "+6.8%", "光电子", "17°C", "良 70"),
    ("长沙市", "1.37万亿", "1024万", "+6.5%", "工程机械", "18°C", "良 72"),
    ("郑州市", "1.29万亿", "1282万", "+5.5%", "交通枢纽", "15°C", "良 80"),
    ("西安市", "1.14万亿", "1316万", "+6.5%", "科技教育", "14°C", "良 75"),
    ("渝中区", "1500亿", "65万", "+6.5%", "金融商贸", "17°C", "良 68"),
    ("江北区", "1400亿", "95万", "+6.8%", "商务服务", "17°C", "良 70"),
    ("渝北区", "2100亿", "180万", "+7.2%", "汽车制造", "17°C", "良 65"),
];

/// District-level statistics.
pub(crate) const DISTRICTS: &[StatsRow] = &[
    ("天河区", "5200亿", "180万", "+6.5%", "商务服务", "25°C", "良 68"),
    ("越秀区", "3500亿", "115万", "+5.8%", "商贸金融", "25°C", "良 70"),
    ("海珠区", "2100亿", "180万", "+5.5%", "文化创意", "25°C", "良 72"),
    ("南山区", "7500亿", "179万", "+7.5%", "科技创新", "26°C", "优 48"),
    ("福田区", "5200亿", "165万", "+6.8%", "金融服务", "26°C", "优 50"),
    ("龙岗区", "5100亿", "420万", "+6.5%", "电子制造", "26°C", "优 52"),
];

/// `(month, sales)` for the monthly sales chart.
pub(crate) const SALES: &[(&str, u32)] = &[
    ("1月", 820),
    ("2月", 932),
    ("3月", 901),
    ("4月", 934),
    ("5月", 1290),
    ("6月", 1330),
    ("7月", 1320),
    ("8月", 1200),
    ("9月", 1100),
    ("10月", 1400),
    ("11月", 1500),
    ("12月", 1600),
];

/// `(category, sales)` for the category pie.
pub(crate) const CATEGORIES: &[(&str, u32)] = &[
    ("电子产品", 335),
    ("服装鞋帽", 310),
    ("食品饮料", 234),
    ("家居用品", 135),
    ("图书文具", 148),
    ("运动户外", 99),
];

/// `(channel, visits)` for the traffic source chart.
pub(crate) const TRAFFIC: &[(&str, u32)] = &[
    ("直接访问", 4396),
    ("搜索引擎", 4251),
    ("社交媒体", 2147),
    ("邮件营销", 1843),
    ("广告推广", 1622),
];

/// `(time of day, page views, unique visitors)`, every two hours.
pub(crate) const REALTIME: &[(&str, u32, u32)] = &[
    ("00:00", 320, 280),
    ("02:00", 302, 250),
    ("04:00", 301, 220),
    ("06:00", 334, 290),
    ("08:00", 390, 330),
    ("10:00", 330, 310),
    ("12:00", 320, 280),
    ("14:00", 302, 250),
    ("16:00", 301, 220),
    ("18:00", 334, 290),
    ("20:00", 390, 330),
    ("22:00", 330, 310),
];

/// `(short name, [longitude, latitude] of the capital, score)`
pub(crate) const PERFORMANCE: &[(&str, [f64; 2], u32)] = &[
    ("北京", [116.46, 39.92], 95),
    ("天津", [117.2, 39.13], 85),
    ("上海", [121.48, 31.22], 92),
    ("重庆", [106.54, 29.59], 78),
    ("河北", [114.48, 38.03], 88),
    ("河南", [113.65, 34.76], 82),
    ("云南", [102.73, 25.04], 75),
    ("辽宁", [123.38, 41.8], 86),
    ("黑龙江", [126.63, 45.75], 79),
    ("湖南", [113.0, 28.21], 84),
    ("安徽", [117.27, 31.86], 81),
    ("山东", [117.0, 36.65], 89),
    ("新疆", [87.68, 43.77], 72),
    ("江苏", [118.78, 32.04], 91),
    ("浙江", [120.19, 30.26], 87),
    ("江西", [115.89, 28.68], 83),
    ("湖北", [114.31, 30.52], 85),
    ("广西", [108.33, 22.84], 76),
    ("甘肃", [103.73, 36.03], 74),
    ("山西", [112.53, 37.87], 80),
    ("内蒙古", [111.65, 40.82], 77),
    ("陕西", [108.95, 34.27], 82),
    ("吉林", [125.35, 43.88], 78),
    ("福建", [119.3, 26.08], 86),
    ("贵州", [106.71, 26.57], 73),
    ("广东", [113.23, 23.16], 94),
    ("青海", [101.74, 36.56], 71),
    ("西藏", [91.11, 29.97], 68),
    ("四川", [104.06, 30.67], 81),
    ("宁夏", [106.27, 38.47], 75),
    ("海南", [110.35, 20.02], 79),
];
