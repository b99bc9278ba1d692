//! Утилиты форматирования чисел для таблицы продуктов

/// Вставляет пробел-разделитель тысяч в целую часть
fn group_thousands(integer_part: &str) -> String {
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    grouped.chars().rev().collect()
}

/// Форматирует денежное значение: 2 знака после запятой, разделитель тысяч
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    format!("{}.{}", group_thousands(integer_part), decimal_part)
}

/// Форматирует количество: без хвостовых нулей, разделитель тысяч.
/// Платформа хранит количества как decimal, но дробные значения редки.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        group_thousands(&format!("{:.0}", value))
    } else {
        let formatted = format!("{}", value);
        match formatted.split_once('.') {
            Some((integer_part, decimal_part)) => {
                format!("{}.{}", group_thousands(integer_part), decimal_part)
            }
            None => group_thousands(&formatted),
        }
    }
}
