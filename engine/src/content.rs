use std::collections::HashMap;

pub fn builtin_fighters() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("billy", include_str!("../content/fighters/billy.json")),
        ("bob", include_str!("../content/fighters/bob.json")),
    ])
}
