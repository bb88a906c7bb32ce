use crate::core::domain_constants::derive_constants;
use crate::core::implementation_gen::generate_implementation;
use crate::core::interface_gen::generate_interface;
use crate::core::normalizer::normalize;
use crate::core::segmenter::segment;
use crate::domain::model::{GeneratedSources, GeneratorOptions, ParsedTables, Sheet};
use crate::utils::error::Result;

/// 切割並轉換試算表，不產生任何程式碼
pub fn parse_tables(sheet: &Sheet) -> Result<ParsedTables> {
    let segments = segment(sheet)?;
    normalize(&segments)
}

/// 由已解析的紀錄產生介面檔與實作檔
pub fn generate_from_tables(
    tables: &ParsedTables,
    options: &GeneratorOptions,
) -> Result<GeneratedSources> {
    let constants = derive_constants(&tables.types, &options.type_suffix)?;
    tracing::info!(
        "Derived {} bound constants from {} types",
        constants.defined_count(),
        tables.types.len()
    );

    Ok(GeneratedSources {
        interface: generate_interface(&tables.types, &tables.data, &constants, options),
        implementation: generate_implementation(&tables.data, &constants, options),
        type_count: tables.types.len(),
        data_count: tables.data.len(),
        constant_count: constants.defined_count(),
    })
}

pub fn generate_sources(sheet: &Sheet, options: &GeneratorOptions) -> Result<GeneratedSources> {
    let tables = parse_tables(sheet)?;
    generate_from_tables(&tables, options)
}
