use quiz_core::model::Symbol;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTabVm {
    pub symbol: Symbol,
    pub glyph: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolDetailVm {
    pub glyph: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub examples: Vec<&'static str>,
}

/// Symbol the reference panel opens on.
pub const DEFAULT_REFERENCE_SYMBOL: Symbol = Symbol::Equal;

#[must_use]
pub fn map_symbol_tabs(selected: Symbol) -> Vec<SymbolTabVm> {
    Symbol::ALL
        .iter()
        .map(|&symbol| SymbolTabVm {
            symbol,
            glyph: symbol.glyph(),
            class: if symbol == selected {
                "symbol-tab symbol-tab--active"
            } else {
                "symbol-tab"
            },
        })
        .collect()
}

#[must_use]
pub fn map_symbol_detail(symbol: Symbol) -> SymbolDetailVm {
    SymbolDetailVm {
        glyph: symbol.glyph(),
        name: symbol.name(),
        description: symbol.description(),
        examples: symbol.examples().to_vec(),
    }
}
