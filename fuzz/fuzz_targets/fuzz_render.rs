#![no_main]

use libfuzzer_sys::fuzz_target;
use numwords::{Decimal, Formatter, LocaleTable};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 512 {
        return;
    }

    // Parsing must never panic; rejected input is fine.
    let Ok(value) = text.parse::<Decimal>() else {
        return;
    };

    let Ok(en) = Formatter::new("en", LocaleTable::english()) else {
        return;
    };

    let number = en.render_number(&value);
    assert!(!number.is_empty());
    assert!(!number.contains("  "), "double space in {number:?}");

    let money = en.render_currency(&value);
    assert!(money.matches("minus").count() <= 1, "{money:?}");
    assert!(money.ends_with("dollars") || money.ends_with("dollar") || money.ends_with("cent") || money.ends_with("cents"));

    // Display output parses back to the same value.
    let reparsed: Decimal = value.to_string().parse().expect("display output parses");
    assert_eq!(reparsed, value);
});
