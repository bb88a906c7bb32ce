use crate::domain::model::{Region, Sheet};
use crate::utils::error::{CodegenError, Result};

pub const TYPES_MARKER: &str = "TYPES";
pub const DONNEES_MARKER: &str = "DONNEES";

/// 標記列之後的標題列位移
const HEADER_OFFSET: usize = 1;
/// 標記列之後第一筆資料列的位移
const DATA_OFFSET: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    pub types: Region,
    pub donnees: Region,
}

/// 第一個含有標記儲存格的列
pub fn find_marker(sheet: &Sheet, marker: &str) -> Option<usize> {
    sheet
        .rows
        .iter()
        .position(|row| row.iter().any(|cell| cell.trim() == marker))
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

fn slice_region(sheet: &Sheet, marker: &str, marker_row: usize, end: usize) -> Result<Region> {
    let header_index = marker_row + HEADER_OFFSET;
    let header = sheet
        .rows
        .get(header_index)
        .filter(|_| header_index < end)
        .ok_or_else(|| CodegenError::MissingHeaderRow {
            region: marker.to_string(),
            row: header_index + 1,
        })?
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect();

    let start = (marker_row + DATA_OFFSET).min(end);
    let rows = sheet.rows[start..end]
        .iter()
        .enumerate()
        .filter(|(_, row)| !is_blank_row(row))
        .map(|(offset, row)| (start + offset, row.clone()))
        .collect();

    Ok(Region {
        marker: marker.to_string(),
        header_index,
        header,
        rows,
    })
}

/// 將試算表切成 TYPES 與 DONNEES 兩個區塊
///
/// TYPES 區塊為 `types+2 .. donnees`，DONNEES 區塊為 `donnees+2 ..` 到表尾，
/// 完全空白的列會被捨棄。缺少標記時直接回報錯誤，不會退回第一列。
pub fn segment(sheet: &Sheet) -> Result<Segments> {
    let types_row = find_marker(sheet, TYPES_MARKER).ok_or_else(|| CodegenError::MissingMarker {
        marker: TYPES_MARKER.to_string(),
    })?;
    let donnees_row =
        find_marker(sheet, DONNEES_MARKER).ok_or_else(|| CodegenError::MissingMarker {
            marker: DONNEES_MARKER.to_string(),
        })?;

    if donnees_row <= types_row + HEADER_OFFSET {
        return Err(CodegenError::MarkersOutOfOrder {
            first: TYPES_MARKER.to_string(),
            first_row: types_row + 1,
            second: DONNEES_MARKER.to_string(),
            second_row: donnees_row + 1,
        });
    }

    let types = slice_region(sheet, TYPES_MARKER, types_row, donnees_row)?;
    let donnees = slice_region(sheet, DONNEES_MARKER, donnees_row, sheet.len())?;

    tracing::debug!(
        "Segmented sheet: TYPES at row {} ({} rows), DONNEES at row {} ({} rows)",
        types_row + 1,
        types.rows.len(),
        donnees_row + 1,
        donnees.rows.len()
    );

    Ok(Segments { types, donnees })
}
