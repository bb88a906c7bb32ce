use crate::core::naming::derive_accessor_fragment;
use crate::core::segmenter::Segments;
use crate::domain::model::{DataSpec, ParsedTables, Region, TypeKind, TypeSpec};
use crate::utils::error::{CodegenError, Result};
use crate::utils::validation::validate_identifier;
use std::collections::{HashMap, HashSet};

pub const COL_COMMENT: &str = "Commentaire";
pub const COL_KIND: &str = "Genre";
pub const COL_DECLARATION: &str = "Declaration";
pub const COL_NAME: &str = "Nom";
pub const COL_DOMAIN: &str = "Domaine";
pub const COL_TYPE: &str = "Type";
pub const COL_INIT_VALUE: &str = "Valeur d'init";

/// TYPES 區塊的欄位
pub const TYPES_COLUMNS: [&str; 5] = [COL_COMMENT, COL_KIND, COL_DECLARATION, COL_NAME, COL_DOMAIN];
/// DONNEES 區塊的欄位
pub const DONNEES_COLUMNS: [&str; 4] = [COL_NAME, COL_TYPE, COL_INIT_VALUE, COL_COMMENT];

/// 依標題列建立的欄位索引
struct ColumnIndex<'a> {
    region: &'a Region,
    columns: HashMap<&'static str, usize>,
}

impl<'a> ColumnIndex<'a> {
    fn build(region: &'a Region, expected: &[&'static str]) -> Result<Self> {
        let mut columns = HashMap::new();
        let mut missing = Vec::new();

        for label in expected {
            match region.header.iter().position(|cell| cell.trim() == *label) {
                Some(index) => {
                    columns.insert(*label, index);
                }
                None => missing.push(label.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(CodegenError::SchemaError {
                region: region.marker.clone(),
                missing,
            });
        }

        Ok(Self { region, columns })
    }

    fn cell<'r>(&self, row: &'r [String], label: &str) -> &'r str {
        self.columns
            .get(label)
            .and_then(|index| row.get(*index))
            .map(String::as_str)
            .unwrap_or("")
    }

    fn required(&self, sheet_row: usize, row: &[String], label: &str) -> Result<String> {
        let value = self.cell(row, label).trim();
        if value.is_empty() {
            return Err(self.invalid(sheet_row, label, "is required"));
        }
        Ok(value.to_string())
    }

    fn identifier(&self, sheet_row: usize, row: &[String], label: &str) -> Result<String> {
        let value = self.required(sheet_row, row, label)?;
        validate_identifier(label, &value)
            .map_err(|_| self.invalid(sheet_row, label, "must be a C identifier"))?;
        Ok(value)
    }

    fn invalid(&self, sheet_row: usize, label: &str, reason: &str) -> CodegenError {
        CodegenError::InvalidRecord {
            region: self.region.marker.clone(),
            row: sheet_row + 1,
            field: label.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub fn normalize_types(region: &Region) -> Result<Vec<TypeSpec>> {
    let index = ColumnIndex::build(region, &TYPES_COLUMNS)?;
    let mut seen = HashSet::new();
    let mut types = Vec::with_capacity(region.rows.len());

    for (sheet_row, row) in &region.rows {
        let name = index.identifier(*sheet_row, row, COL_NAME)?;
        let kind = TypeKind::parse(&index.required(*sheet_row, row, COL_KIND)?);
        let declaration = match kind {
            TypeKind::Atom | TypeKind::Enum => {
                index.required(*sheet_row, row, COL_DECLARATION)?
            }
            TypeKind::Other(_) => index.cell(row, COL_DECLARATION).trim().to_string(),
        };
        let domain = Some(index.cell(row, COL_DOMAIN).trim())
            .filter(|domain| !domain.is_empty())
            .map(str::to_string);

        if !seen.insert(name.clone()) {
            return Err(CodegenError::DuplicateName {
                region: region.marker.clone(),
                name,
            });
        }

        tracing::debug!("Type '{}' ({:?}) at row {}", name, kind, sheet_row + 1);
        types.push(TypeSpec {
            comment: index.cell(row, COL_COMMENT).to_string(),
            kind,
            declaration,
            name,
            domain,
        });
    }

    Ok(types)
}

pub fn normalize_data(region: &Region) -> Result<Vec<DataSpec>> {
    let index = ColumnIndex::build(region, &DONNEES_COLUMNS)?;
    let mut seen = HashSet::new();
    let mut data = Vec::with_capacity(region.rows.len());

    for (sheet_row, row) in &region.rows {
        let name = index.identifier(*sheet_row, row, COL_NAME)?;
        let type_name = index.required(*sheet_row, row, COL_TYPE)?;
        let init_value = index.required(*sheet_row, row, COL_INIT_VALUE)?;

        // 欄位名稱以小寫輸出，大小寫不同也視為重複
        if !seen.insert(derive_accessor_fragment(&name)) {
            return Err(CodegenError::DuplicateName {
                region: region.marker.clone(),
                name,
            });
        }

        tracing::debug!("Data '{}': {} = {}", name, type_name, init_value);
        data.push(DataSpec {
            name,
            type_name,
            init_value,
            comment: index.cell(row, COL_COMMENT).to_string(),
        });
    }

    Ok(data)
}

pub fn normalize(segments: &Segments) -> Result<ParsedTables> {
    let tables = ParsedTables {
        types: normalize_types(&segments.types)?,
        data: normalize_data(&segments.donnees)?,
    };

    let known: HashSet<&str> = tables.types.iter().map(|t| t.name.as_str()).collect();
    for spec in &tables.data {
        if !known.contains(spec.type_name.as_str()) {
            tracing::warn!(
                "Data '{}' uses type '{}' which is not declared in TYPES",
                spec.name,
                spec.type_name
            );
        }
    }

    Ok(tables)
}
