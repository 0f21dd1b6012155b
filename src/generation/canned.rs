//! Fixed response bodies, one per mode
//!
//! The assistant never looks at the request text: every successful generation
//! for a given mode yields exactly the same body.

use super::Mode;

const TEXT_RESPONSE: &str = "# Будущее искусственного интеллекта

Искусственный интеллект становится неотъемлемой частью нашей жизни. С каждым годом AI-технологии развиваются всё быстрее, открывая новые возможности для человечества.

## Ключевые направления

**1. Генеративный AI** — создание контента, от текстов до изображений
**2. Автономные системы** — самоуправляемые автомобили и роботы
**3. Персонализация** — AI-помощники, адаптирующиеся под каждого пользователя

Будущее за технологиями, которые усиливают человеческие способности, а не заменяют их.";

const IMAGE_RESPONSE: &str = "🎨 Изображение успешно сгенерировано!

В полной версии здесь появится изображение на основе вашего описания. Для доступа к генерации изображений выберите план Pro или Enterprise.";

const CODE_RESPONSE: &str = "function sortArray<T>(arr: T[], compareFn?: (a: T, b: T) => number): T[] {
  return [...arr].sort(compareFn);
}

// Пример использования
const numbers = [5, 2, 8, 1, 9];
const sorted = sortArray(numbers, (a, b) => a - b);
console.log(sorted); // [1, 2, 5, 8, 9]

// Для объектов
const users = [
  { name: 'Alice', age: 30 },
  { name: 'Bob', age: 25 }
];
const sortedByAge = sortArray(users, (a, b) => a.age - b.age);";

/// Body returned for `mode`
pub fn canned_response(mode: Mode) -> &'static str {
    match mode {
        Mode::Text => TEXT_RESPONSE,
        Mode::Image => IMAGE_RESPONSE,
        Mode::Code => CODE_RESPONSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_body_is_markdown_article() {
        let body = canned_response(Mode::Text);
        assert!(body.starts_with("# Будущее искусственного интеллекта"));
        assert!(body.contains("## Ключевые направления"));
    }

    #[test]
    fn image_body_points_to_paid_plans() {
        let body = canned_response(Mode::Image);
        assert!(body.starts_with("🎨 Изображение успешно сгенерировано!"));
        assert!(body.contains("Pro или Enterprise"));
    }

    #[test]
    fn code_body_defines_sort_array() {
        let body = canned_response(Mode::Code);
        assert!(body.starts_with("function sortArray<T>(arr: T[]"));
        assert!(body.ends_with("const sortedByAge = sortArray(users, (a, b) => a.age - b.age);"));
    }

    #[test]
    fn every_mode_has_a_distinct_body() {
        let bodies: Vec<_> = Mode::ALL.iter().map(|m| canned_response(*m)).collect();
        assert_ne!(bodies[0], bodies[1]);
        assert_ne!(bodies[1], bodies[2]);
        assert_ne!(bodies[0], bodies[2]);
    }
}
