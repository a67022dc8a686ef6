use crate::domain::model::Category;

/// Elevator service query templates.
pub const ELEVATOR_QUERIES: &[&str] = &[
    "تعمیرکار آسانسور",
    "سرویسکار آسانسور",
    "تعمیر آسانسور",
    "سرویس آسانسور",
    "آسانسور",
    "شرکت آسانسور",
    "نصب آسانسور",
    "بازسازی آسانسور",
    "سرویس ماهانه آسانسور",
    "شرکت آسانسور برای قرارداد",
];

/// Building painting service query templates.
pub const PAINTING_QUERIES: &[&str] = &[
    "نقاش ساختمان",
    "نقاشی ساختمان",
    "نقاش",
    "رنگ کاری ساختمان",
    "رنگ کار",
    "رنگ آمیزی ساختمان",
    "نقاشی منزل",
    "نقاشی واحد",
    "نقاشی خانه",
    "رنگ آمیزی دیوار",
    "رنگ آمیزی سقف",
    "رنگ روغنی",
    "رنگ پلاستیک",
    "پتینه کاری",
];

/// All 31 Iranian provinces, in the order queries are emitted.
pub const IRANIAN_PROVINCES: &[&str] = &[
    "تهران",
    "اصفهان",
    "فارس",
    "خراسان رضوی",
    "خوزستان",
    "آذربایجان شرقی",
    "مازندران",
    "کرمان",
    "سیستان و بلوچستان",
    "گیلان",
    "آذربایجان غربی",
    "همدان",
    "کرمانشاه",
    "مرکزی",
    "لرستان",
    "اردبیل",
    "قزوین",
    "یزد",
    "زنجان",
    "قم",
    "گلستان",
    "کردستان",
    "بوشهر",
    "هرمزگان",
    "چهارمحال و بختیاری",
    "ایلام",
    "کهگیلویه و بویراحمد",
    "خراسان شمالی",
    "خراسان جنوبی",
    "سمنان",
    "البرز",
];

pub fn templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Elevator => ELEVATOR_QUERIES,
        Category::Painting => PAINTING_QUERIES,
    }
}
