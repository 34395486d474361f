//! Region name mapping for readable display
//! Maps two-letter Brazilian state codes to full state names

use std::collections::HashMap;
use std::sync::LazyLock;

/// State code to display name, covering all 26 states plus the federal district
pub static REGION_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("AC", "Acre");
    m.insert("AL", "Alagoas");
    m.insert("AP", "Amapa");
    m.insert("AM", "Amazonas");
    m.insert("BA", "Bahia");
    m.insert("CE", "Ceara");
    m.insert("DF", "Distrito Federal");
    m.insert("ES", "Espirito Santo");
    m.insert("GO", "Goias");
    m.insert("MA", "Maranhao");
    m.insert("MT", "Mato Grosso");
    m.insert("MS", "Mato Grosso do Sul");
    m.insert("MG", "Minas Gerais");
    m.insert("PA", "Para");
    m.insert("PB", "Paraiba");
    m.insert("PR", "Parana");
    m.insert("PE", "Pernambuco");
    m.insert("PI", "Piaui");
    m.insert("RJ", "Rio de Janeiro");
    m.insert("RN", "Rio Grande do Norte");
    m.insert("RS", "Rio Grande do Sul");
    m.insert("RO", "Rondonia");
    m.insert("RR", "Roraima");
    m.insert("SC", "Santa Catarina");
    m.insert("SP", "Sao Paulo");
    m.insert("SE", "Sergipe");
    m.insert("TO", "Tocantins");

    m
});

/// Get a display name for a state code, falling back to the code itself.
pub fn get_region_name(code: &str) -> String {
    REGION_NAMES
        .get(code)
        .map(|name| name.to_string())
        .unwrap_or_else(|| code.to_string())
}
