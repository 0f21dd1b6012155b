//! Static landing page copy
//!
//! Everything on the page that is not the assistant: inert data rendered by
//! the landing view. Kept in one place so the view code only decides layout.

use crate::generation::Mode;

pub const BRAND: &str = "McRellyWorld";
pub const TAGLINE: &str = "AI-платформа для генерации контента нового поколения";

/// Page sections reachable from the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Features,
    Api,
    Pricing,
    About,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Features,
        Section::Api,
        Section::Pricing,
        Section::About,
    ];

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Features => "Возможности",
            Section::Api => "API",
            Section::Pricing => "Тарифы",
            Section::About => "О проекте",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hero
// ─────────────────────────────────────────────────────────────────────────────

pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub nav_cta: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "AI-платформа нового поколения",
    headline: "Генерация контента",
    headline_accent: "на основе AI",
    subtitle: "Создавайте тексты, изображения и код с помощью передовых нейросетей. \
               Быстро, качественно, без ограничений.",
    primary_cta: "Попробовать бесплатно",
    secondary_cta: "Документация",
    nav_cta: "Начать работу",
};

/// A headline number with its caption
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat {
        value: "10M+",
        label: "Запросов в день",
    },
    Stat {
        value: "99.9%",
        label: "Uptime",
    },
    Stat {
        value: "<100ms",
        label: "Отклик",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Features
// ─────────────────────────────────────────────────────────────────────────────

pub struct SectionHeader {
    pub badge: &'static str,
    pub title: &'static str,
    pub title_accent: &'static str,
    pub subtitle: &'static str,
}

pub const FEATURES_HEADER: SectionHeader = SectionHeader {
    badge: "Возможности",
    title: "Три направления,",
    title_accent: " безграничные возможности",
    subtitle: "Мощные AI-модели для создания любого контента",
};

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📝",
        title: "Генерация текста",
        description: "Создавайте уникальный контент для любых целей: статьи, описания, посты",
    },
    Feature {
        icon: "🖼",
        title: "Создание изображений",
        description: "Генерируйте визуальный контент из текстовых описаний",
    },
    Feature {
        icon: "💻",
        title: "Генерация кода",
        description: "Автоматическое написание чистого и эффективного кода",
    },
];

pub const FEATURE_LINK: &str = "Подробнее →";

/// One tab of the interactive showcase card
pub struct Showcase {
    pub prompt_label: &'static str,
    pub prompt: &'static str,
    pub result: &'static str,
}

pub const SHOWCASE_TITLE: &str = "Интерактивная демонстрация";
pub const SHOWCASE_SUBTITLE: &str = "Попробуйте разные типы генерации в действии";

pub fn showcase(mode: Mode) -> Showcase {
    match mode {
        Mode::Text => Showcase {
            prompt_label: "Промпт:",
            prompt: "\"Напиши короткое описание нейросети для лендинга\"",
            result: "Наша нейросеть — это передовая AI-платформа, способная генерировать \
                     высококачественный контент за секунды. Используя глубокое обучение и \
                     обработку естественного языка, система понимает контекст и создает \
                     уникальные тексты, адаптированные под ваши задачи.",
        },
        Mode::Image => Showcase {
            prompt_label: "Промпт:",
            prompt: "\"Футуристический AI-сервер в неоновом свете\"",
            result: "🖼  Демо изображение появится здесь",
        },
        Mode::Code => Showcase {
            prompt_label: "Задача:",
            prompt: "\"Создай функцию для валидации email на TypeScript\"",
            result: r#"function isValidEmail(email: string): boolean {
  const emailRegex = /^[^\s@]+@[^\s@]+\.[^\s@]+$/;
  return emailRegex.test(email);
}

// Использование
console.log(isValidEmail("user@example.com")); // true
console.log(isValidEmail("invalid-email")); // false"#,
        },
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// API
// ─────────────────────────────────────────────────────────────────────────────

pub const API_HEADER: SectionHeader = SectionHeader {
    badge: "API Документация",
    title: "Простой и",
    title_accent: " мощный API",
    subtitle: "RESTful API с понятной документацией и примерами кода",
};

pub const QUICK_START_TITLE: &str = "Быстрый старт";
pub const QUICK_START_SUBTITLE: &str = "Начните работу за 5 минут";

pub struct QuickStartStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const QUICK_START: [QuickStartStep; 3] = [
    QuickStartStep {
        title: "Получите API ключ",
        body: "Зарегистрируйтесь на платформе и создайте API ключ в личном кабинете. \
               Ключ доступен сразу после регистрации.",
    },
    QuickStartStep {
        title: "Установите SDK",
        body: "npm install @mcrellyworld/ai-sdk",
    },
    QuickStartStep {
        title: "Сделайте первый запрос",
        body: "Используйте примеры кода справа для вашего первого запроса к API.",
    },
];

pub const SECURITY_TITLE: &str = "Безопасность";
pub const SECURITY_NOTES: [&str; 3] = [
    "HTTPS обязателен для всех запросов",
    "Rate limiting: 100 req/sec",
    "Bearer token авторизация",
];

pub const API_EXAMPLES_TITLE: &str = "Примеры кода";

/// Tab label for the API examples card
pub fn api_tab_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Text => "Text",
        Mode::Image => "Image",
        Mode::Code => "Code",
    }
}

/// Sample client code shown in the API examples card
pub fn api_example(mode: Mode) -> &'static str {
    match mode {
        Mode::Text => {
            r#"// Генерация текста
const response = await fetch('https://api.mcrellyworld.ai/v1/generate/text', {
  method: 'POST',
  headers: {
    'Authorization': 'Bearer YOUR_API_KEY',
    'Content-Type': 'application/json'
  },
  body: JSON.stringify({
    prompt: "Напиши статью о будущем AI",
    max_tokens: 1000,
    temperature: 0.7
  })
});

const data = await response.json();
console.log(data.text);"#
        }
        Mode::Image => {
            r#"# Генерация изображения
import requests

response = requests.post(
    'https://api.mcrellyworld.ai/v1/generate/image',
    headers={'Authorization': 'Bearer YOUR_API_KEY'},
    json={
        'prompt': 'Футуристический город на закате',
        'size': '1024x1024',
        'style': 'photorealistic'
    }
)

image_url = response.json()['image_url']
print(image_url)"#
        }
        Mode::Code => {
            r#"// Генерация кода
curl -X POST https://api.mcrellyworld.ai/v1/generate/code \
  -H "Authorization: Bearer YOUR_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{
    "task": "Создай React компонент для слайдера",
    "language": "typescript",
    "framework": "react"
  }'"#
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pricing
// ─────────────────────────────────────────────────────────────────────────────

pub const PRICING_HEADER: SectionHeader = SectionHeader {
    badge: "Тарифы",
    title: "Выберите",
    title_accent: " свой план",
    subtitle: "Прозрачные цены без скрытых платежей",
};

/// Monthly price of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    /// Rubles per month
    Monthly(u32),
    /// Negotiated individually
    OnRequest,
}

impl Price {
    /// Display text: amount with currency, or the on-request label
    pub fn display(self) -> String {
        match self {
            Price::Monthly(rub) => format!("{} ₽/мес", rub),
            Price::OnRequest => "По запросу".to_string(),
        }
    }

    /// Call to action under the plan
    pub fn cta(self) -> &'static str {
        match self {
            Price::Monthly(_) => "Выбрать план",
            Price::OnRequest => "Связаться с нами",
        }
    }
}

pub struct Plan {
    pub name: &'static str,
    pub price: Price,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const POPULAR_BADGE: &str = "Популярный";

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: Price::Monthly(0),
        description: "Для знакомства с платформой",
        features: &[
            "100 запросов/день",
            "Базовые модели",
            "Email поддержка",
            "API доступ",
        ],
        popular: false,
    },
    Plan {
        name: "Pro",
        price: Price::Monthly(2990),
        description: "Для профессионалов",
        features: &[
            "Безлимитные запросы",
            "Все модели",
            "Приоритетная поддержка",
            "Расширенный API",
            "Custom fine-tuning",
        ],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: Price::OnRequest,
        description: "Для компаний",
        features: &[
            "Выделенные ресурсы",
            "SLA 99.9%",
            "Персональный менеджер",
            "On-premise решения",
            "Кастомная интеграция",
        ],
        popular: false,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// About
// ─────────────────────────────────────────────────────────────────────────────

pub const ABOUT_HEADER: SectionHeader = SectionHeader {
    badge: "О проекте",
    title: "Миссия",
    title_accent: " McRellyWorld",
    subtitle: "",
};

pub const MISSION: &str = "McRellyWorld — это платформа, которая делает искусственный интеллект \
                           доступным для всех. Мы верим, что AI должен помогать людям раскрывать \
                           творческий потенциал, а не заменять их.";

pub struct Pillar {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PILLARS: [Pillar; 2] = [
    Pillar {
        title: "Наша цель",
        body: "Создать самую быструю и качественную платформу для генерации контента, \
               доступную каждому пользователю.",
    },
    Pillar {
        title: "Наши ценности",
        body: "Инновации, прозрачность, качество и фокус на пользовательском опыте \
               лежат в основе всего, что мы делаем.",
    },
];

pub const ACHIEVEMENTS_TITLE: &str = "Наши достижения";

pub const ACHIEVEMENTS: [Stat; 4] = [
    Stat {
        value: "50K+",
        label: "Активных пользователей",
    },
    Stat {
        value: "1M+",
        label: "Генераций в день",
    },
    Stat {
        value: "15+",
        label: "AI моделей",
    },
    Stat {
        value: "24/7",
        label: "Поддержка",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Footer
// ─────────────────────────────────────────────────────────────────────────────

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Продукт",
        links: &["Возможности", "Тарифы", "API"],
    },
    FooterColumn {
        title: "Компания",
        links: &["О нас", "Блог", "Вакансии"],
    },
    FooterColumn {
        title: "Поддержка",
        links: &["Документация", "Контакты", "Статус"],
    },
];

pub const SOCIAL_LINKS: [&str; 3] = ["GitHub", "Twitter", "LinkedIn"];

pub const COPYRIGHT: &str = "© 2025 McRellyWorld. Все права защищены.";

// ─────────────────────────────────────────────────────────────────────────────
// Assistant dialog
// ─────────────────────────────────────────────────────────────────────────────

pub const ASSISTANT_TITLE: &str = "AI Ассистент McRellyWorld";
pub const ASSISTANT_DESCRIPTION: &str =
    "Попробуйте генерацию контента бесплатно. Введите запрос и получите результат за секунды.";
pub const ASSISTANT_TRIGGER: &str = "Сгенерировать";
pub const ASSISTANT_TRIGGER_BUSY: &str = "Генерация...";
pub const ASSISTANT_RESULT: &str = "Результат";
pub const ASSISTANT_COPY: &str = "Скопировать результат";

// ─────────────────────────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────────────────────────

pub const TOAST_ERROR_TITLE: &str = "Ошибка";
pub const TOAST_DONE_TITLE: &str = "Готово!";
pub const TOAST_DONE_BODY: &str = "Контент успешно сгенерирован";
pub const TOAST_COPIED_TITLE: &str = "Скопировано!";
pub const TOAST_COPIED_BODY: &str = "Результат скопирован в буфер обмена";
pub const TOAST_COPY_FAILED_BODY: &str = "Не удалось скопировать";
pub const TOAST_EXAMPLE_COPIED_BODY: &str = "Пример кода скопирован в буфер обмена";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_request_plan_offers_contact() {
        let enterprise = PLANS.iter().find(|p| p.name == "Enterprise").unwrap();
        assert_eq!(enterprise.price.display(), "По запросу");
        assert_eq!(enterprise.price.cta(), "Связаться с нами");

        let pro = PLANS.iter().find(|p| p.name == "Pro").unwrap();
        assert_eq!(pro.price.display(), "2990 ₽/мес");
        assert_eq!(pro.price.cta(), "Выбрать план");
    }

    #[test]
    fn exactly_one_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Pro");
    }

    #[test]
    fn api_examples_target_matching_endpoints() {
        assert!(api_example(Mode::Text).contains("/v1/generate/text"));
        assert!(api_example(Mode::Image).contains("/v1/generate/image"));
        assert!(api_example(Mode::Code).contains("/v1/generate/code"));
    }
}
