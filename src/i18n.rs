// Bilingual page copy. The language is an explicit value resolved from the
// request; the core pricing/options logic never sees it.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Tr,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
        }
    }
}

/// Static copy for one language. Templates read these fields directly.
pub struct Text {
    pub title: &'static str,
    pub nav_home: &'static str,
    pub nav_prediction: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_description: &'static str,
    pub hero_cta: &'static str,
    pub how_title: &'static str,
    pub how_subtitle: &'static str,
    pub step1_title: &'static str,
    pub step1_text: &'static str,
    pub step2_title: &'static str,
    pub step2_text: &'static str,
    pub step3_title: &'static str,
    pub step3_text: &'static str,
    pub form_title: &'static str,
    pub form_subtitle: &'static str,
    pub form_brand: &'static str,
    pub form_model: &'static str,
    pub form_new_car: &'static str,
    pub form_age: &'static str,
    pub form_mileage: &'static str,
    pub form_fuel_type: &'static str,
    pub form_transmission: &'static str,
    pub form_power: &'static str,
    pub form_torque: &'static str,
    pub form_submit: &'static str,
    pub form_calculating: &'static str,
    pub result_estimated: &'static str,
    pub result_min: &'static str,
    pub result_max: &'static str,
    pub result_disclaimer: &'static str,
    pub error_failed_to_fetch: &'static str,
    pub error_unknown: &'static str,
}

static TR: Text = Text {
    title: "Velora",
    nav_home: "Ana Sayfa",
    nav_prediction: "Fiyat Tahmini",
    hero_title: "Arabanızın Değerini",
    hero_subtitle: "Anında Öğrenin",
    hero_description: "Akıllı algoritma ile güvenilir araba fiyat tahmini",
    hero_cta: "Fiyat Tahmini Yap",
    how_title: "Nasıl Çalışır?",
    how_subtitle: "3 basit adımda arabanızın değerini öğrenin",
    step1_title: "Bilgileri Girin",
    step1_text: "Aracınızın marka, model ve teknik özelliklerini seçin",
    step2_title: "Tahmin Alın",
    step2_text: "Algoritmamız aracınızın piyasa değerini hesaplar",
    step3_title: "Sonucu Görün",
    step3_text: "Tahmini fiyat aralığını anında görüntüleyin",
    form_title: "Araç Fiyat Tahmini",
    form_subtitle: "Aracınızın bilgilerini girin, değerini öğrenin",
    form_brand: "Marka",
    form_model: "Model",
    form_new_car: "Sıfır araç",
    form_age: "Yaş",
    form_mileage: "Kilometre",
    form_fuel_type: "Yakıt Türü",
    form_transmission: "Vites",
    form_power: "Güç (HP)",
    form_torque: "Tork (Nm)",
    form_submit: "Fiyat Tahmin Et",
    form_calculating: "Hesaplanıyor...",
    result_estimated: "Tahmini Değer",
    result_min: "Min",
    result_max: "Max",
    result_disclaimer: "Bu tahmin bilgilendirme amaçlıdır ve gerçek satış fiyatı farklılık gösterebilir.",
    error_failed_to_fetch: "Tahmin servisine ulaşılamadı. Lütfen daha sonra tekrar deneyin.",
    error_unknown: "Beklenmeyen bir hata oluştu.",
};

static EN: Text = Text {
    title: "Velora",
    nav_home: "Home",
    nav_prediction: "Price Prediction",
    hero_title: "Know Your Car's Value",
    hero_subtitle: "Instantly",
    hero_description: "Reliable car price prediction powered by a smart algorithm",
    hero_cta: "Get a Price Prediction",
    how_title: "How It Works",
    how_subtitle: "Learn your car's value in 3 simple steps",
    step1_title: "Enter Details",
    step1_text: "Select your car's brand, model and specifications",
    step2_title: "Get a Prediction",
    step2_text: "Our algorithm computes your car's market value",
    step3_title: "See the Result",
    step3_text: "View the estimated price range instantly",
    form_title: "Car Price Prediction",
    form_subtitle: "Enter your car's details to learn its value",
    form_brand: "Brand",
    form_model: "Model",
    form_new_car: "Brand new",
    form_age: "Age",
    form_mileage: "Mileage",
    form_fuel_type: "Fuel Type",
    form_transmission: "Transmission",
    form_power: "Power (HP)",
    form_torque: "Torque (Nm)",
    form_submit: "Predict Price",
    form_calculating: "Calculating...",
    result_estimated: "Estimated Value",
    result_min: "Min",
    result_max: "Max",
    result_disclaimer: "This prediction is informational; the actual sale price may differ.",
    error_failed_to_fetch: "Could not reach the prediction service. Please try again later.",
    error_unknown: "An unexpected error occurred.",
};

pub fn text(lang: Lang) -> &'static Text {
    match lang {
        Lang::Tr => &TR,
        Lang::En => &EN,
    }
}
