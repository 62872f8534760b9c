use crate::error::Result;
use arsenal_common::ContentRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: [&str; 8] = [
    "key", "sku", "title", "album", "type", "audio_path", "image_path", "lyrics_path",
];

/// RFC 4180 形式のフィールド（必要な場合のみ引用符で囲む）
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record<W: Write>(writer: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|f| quote_field(f))
        .collect::<Vec<_>>()
        .join(",");
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\r\n")
}

/// インデックス行をCSVで書き出す
pub fn write_csv(rows: &[ContentRow], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_record(&mut writer, &HEADER)?;

    for row in rows {
        write_record(
            &mut writer,
            &[
                row.key.as_str(),
                row.sku.as_str(),
                row.title.as_str(),
                row.album.as_str(),
                row.kind.as_str(),
                row.audio_path.as_str(),
                row.image_path.as_str(),
                row.lyrics_path.as_str(),
            ],
        )?;
    }

    writer.flush()?;
    Ok(())
}
