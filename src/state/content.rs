//! Static firm content: testimonials, services and form options

use super::forms::ChoiceOption;
use super::Bilingual;

/// A client testimonial shown on the home view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: Bilingual,
    pub role: Bilingual,
    pub content: Bilingual,
    /// Star rating, 1-5
    pub rating: u8,
}

impl Testimonial {
    pub fn stars(&self) -> String {
        "★".repeat(self.rating.clamp(1, 5) as usize)
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: Bilingual::new("Ahmed Al-Rashid", "أحمد الراشد"),
        role: Bilingual::new("Business Owner", "صاحب شركة"),
        content: Bilingual::new(
            "Exceptional legal service with great attention to detail. Highly professional and trustworthy.",
            "خدمة قانونية استثنائية مع اهتمام كبير بالتفاصيل. مهني جداً وجدير بالثقة.",
        ),
        rating: 5,
    },
    Testimonial {
        name: Bilingual::new("Sarah Johnson", "سارة جونسون"),
        role: Bilingual::new("Real Estate Investor", "مستثمرة عقارية"),
        content: Bilingual::new(
            "Outstanding expertise in real estate law. Made the complex process simple and stress-free.",
            "خبرة متميزة في قانون العقارات. جعل العملية المعقدة بسيطة وخالية من التوتر.",
        ),
        rating: 5,
    },
    Testimonial {
        name: Bilingual::new("Mohammed Al-Fahad", "محمد الفهد"),
        role: Bilingual::new("Family Client", "عميل أسري"),
        content: Bilingual::new(
            "Compassionate and skilled representation during a difficult time. Truly grateful for the support.",
            "تمثيل رحيم وماهر خلال وقت صعب. ممتن حقاً للدعم المقدم.",
        ),
        rating: 5,
    },
];

/// A practice area that can be consulted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
    pub title: Bilingual,
    pub summary: Bilingual,
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "family-law",
        title: Bilingual::new("Family Law", "قانون الأسرة"),
        summary: Bilingual::new(
            "Marriage, divorce, custody and inheritance matters.",
            "قضايا الزواج والطلاق والحضانة والميراث.",
        ),
    },
    Service {
        slug: "real-estate",
        title: Bilingual::new("Real Estate", "العقارات"),
        summary: Bilingual::new(
            "Buying, selling, leasing and real estate investment.",
            "البيع والشراء والتأجير والاستثمار العقاري.",
        ),
    },
    Service {
        slug: "business-law",
        title: Bilingual::new("Business Law", "القانون التجاري"),
        summary: Bilingual::new(
            "Company formation, governance and commercial disputes.",
            "تأسيس الشركات والحوكمة والنزاعات التجارية.",
        ),
    },
    Service {
        slug: "criminal-defense",
        title: Bilingual::new("Criminal Defense", "الدفاع الجنائي"),
        summary: Bilingual::new(
            "Representation at every stage of criminal proceedings.",
            "التمثيل في جميع مراحل الدعوى الجنائية.",
        ),
    },
    Service {
        slug: "contract-drafting",
        title: Bilingual::new("Contract Drafting", "صياغة العقود"),
        summary: Bilingual::new(
            "Drafting and reviewing contracts that protect your rights.",
            "صياغة ومراجعة العقود بما يحمي حقوقكم.",
        ),
    },
    Service {
        slug: "litigation-arbitration",
        title: Bilingual::new("Litigation & Arbitration", "التقاضي والتحكيم"),
        summary: Bilingual::new(
            "Court representation and arbitration proceedings.",
            "التمثيل أمام المحاكم وإجراءات التحكيم.",
        ),
    },
];

const fn option(value: &'static str, en: &'static str, ar: &'static str) -> ChoiceOption {
    ChoiceOption {
        value,
        label: Bilingual::new(en, ar),
    }
}

pub const PREFERRED_TIMES: &[ChoiceOption] = &[
    option("9:00", "9:00 AM", "9:00 ص"),
    option("10:00", "10:00 AM", "10:00 ص"),
    option("11:00", "11:00 AM", "11:00 ص"),
    option("12:00", "12:00 PM", "12:00 م"),
    option("13:00", "1:00 PM", "1:00 م"),
    option("14:00", "2:00 PM", "2:00 م"),
    option("15:00", "3:00 PM", "3:00 م"),
    option("16:00", "4:00 PM", "4:00 م"),
    option("17:00", "5:00 PM", "5:00 م"),
];

pub const SERVICE_TYPES: &[ChoiceOption] = &[
    option("corporate", "Corporate Law", "القانون التجاري"),
    option("civil", "Civil Law", "القانون المدني"),
    option("criminal", "Criminal Law", "القانون الجنائي"),
    option("family", "Family Law", "قانون الأسرة"),
    option("real-estate", "Real Estate Law", "القانون العقاري"),
    option("other", "Other", "أخرى"),
];

pub const CONSULTATION_TYPES: &[ChoiceOption] = &[
    option("office", "In-Office", "في المكتب"),
    option("phone", "Phone Call", "عبر الهاتف"),
    option("video", "Video Call", "مكالمة فيديو"),
];

pub const CONTACT_METHODS: &[ChoiceOption] = &[
    option("phone", "Phone Call", "مكالمة هاتفية"),
    option("email", "Email", "البريد الإلكتروني"),
    option("whatsapp", "WhatsApp", "واتساب"),
    option("office", "Office Visit", "زيارة المكتب"),
];

pub const URGENCY_LEVELS: &[ChoiceOption] = &[
    option("low", "Low", "منخفضة"),
    option("medium", "Medium", "متوسطة"),
    option("high", "High", "عالية"),
    option("critical", "Critical", "حرجة"),
];

/// Firm contact details shown next to the contact form
pub const CONTACT_DETAILS: &[(Bilingual, &str)] = &[
    (Bilingual::new("Phone", "الهاتف"), "+966 50 123 4567"),
    (Bilingual::new("WhatsApp", "واتساب"), "+966 50 123 4567"),
    (Bilingual::new("Email", "البريد الإلكتروني"), "info@premiumlegal.com"),
];
