use crate::domain::model::Sheet;
use crate::utils::error::Result;

/// 將試算表匯出的分隔文字 (CSV/TSV) 讀成 Sheet
///
/// 沒有標題列，列長度可不一致，儲存格內容保持原樣。
pub fn parse_sheet(data: &[u8], delimiter: u8) -> Result<Sheet> {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    tracing::debug!("Parsed {} rows from delimited sheet", rows.len());
    Ok(Sheet::new(rows))
}
