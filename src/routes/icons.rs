use std::collections::HashMap;

/// A renderable stand-in for an icon key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub name: &'static str,
    pub symbol: &'static str,
}

const FALLBACK: Glyph = Glyph {
    name: "Unknown",
    symbol: "•",
};

/// Maps the icon keys carried in overview data to glyphs. Unknown keys
/// resolve to a neutral fallback.
#[derive(Debug, Clone)]
pub struct IconRegistry {
    glyphs: HashMap<String, Glyph>,
}

impl Default for IconRegistry {
    fn default() -> Self {
        let mut reg = Self {
            glyphs: HashMap::new(),
        };
        for (name, symbol) in [
            ("DataBoard", "▦"),
            ("Collection", "❏"),
            ("Box", "▣"),
            ("Connection", "⇄"),
        ] {
            let glyph = Glyph { name, symbol };
            reg.register(name, glyph);
            reg.register(&format!("{}Icon", name), glyph);
        }
        reg
    }
}

impl IconRegistry {
    pub fn register(&mut self, key: &str, glyph: Glyph) {
        self.glyphs.insert(key.to_string(), glyph);
    }

    pub fn resolve(&self, key: &str) -> Glyph {
        self.glyphs.get(key).copied().unwrap_or(FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn overview_icons_are_known() {
        let reg = IconRegistry::default();
        for item in fixtures::overview_data() {
            assert_ne!(reg.resolve(&item.icon), FALLBACK, "{}", item.icon);
        }
    }

    #[test]
    fn bare_and_suffixed_keys_agree() {
        let reg = IconRegistry::default();
        assert_eq!(reg.resolve("Box"), reg.resolve("BoxIcon"));
        assert_eq!(reg.resolve("BoxIcon").name, "Box");
    }

    #[test]
    fn unknown_key_falls_back() {
        let mut reg = IconRegistry::default();
        assert_eq!(reg.resolve("Cpu"), FALLBACK);
        reg.register("Cpu", Glyph { name: "Cpu", symbol: "▤" });
        assert_eq!(reg.resolve("Cpu").symbol, "▤");
    }
}
