use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use tracing::{debug, info};

use crate::errors::{FormatError, LoadError};
use crate::model::{Product, EXPIRY_FORMAT};

pub const FIELD_SEPARATOR: u8 = b';';

/// Loads every product from `path`, in file order.
///
/// The first malformed line aborts the load; nothing is returned for the
/// lines that parsed before it.
pub fn load_products(path: impl AsRef<Path>) -> Result<Vec<Product>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let products = load_from_reader(file, path)?;
    info!(path = %path.display(), count = products.len(), "Loaded products");
    Ok(products)
}

/// Same as [`load_products`] over an already opened reader. `origin` only
/// labels I/O errors.
pub fn load_from_reader<R: Read>(mut reader: R, origin: &Path) -> Result<Vec<Product>, LoadError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| LoadError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
    parse_products(&content).map_err(LoadError::from)
}

/// Parses every non-blank line of `content` into a product.
pub fn parse_products(content: &str) -> Result<Vec<Product>, FormatError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_SEPARATOR)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let mut products = Vec::new();
    let mut record = StringRecord::new();

    loop {
        let read = reader.read_record(&mut record).map_err(|source| FormatError::Csv {
            line: source.position().map_or(0, |pos| pos.line() as usize),
            source,
        })?;
        if !read {
            break;
        }

        let line_number = line_of_record_ending_at(content, reader.position().byte() as usize);

        // Empty lines never reach here; whitespace-only ones arrive as one field.
        if record.len() == 1 && record[0].trim().is_empty() {
            debug!(line = line_number, "Skipping blank line");
            continue;
        }

        let fields: Vec<&str> = record.iter().collect();
        products.push(decode_fields(line_number, &fields)?);
    }

    Ok(products)
}

/// 1-based line of the record whose terminator ends just before `end`.
/// Record start positions do not account for skipped empty lines, so the
/// line is counted from the record's end instead.
fn line_of_record_ending_at(content: &str, end: usize) -> usize {
    let consumed = content.get(..end).unwrap_or(content);
    let body = consumed.trim_end_matches(['\r', '\n']);
    body.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Parses one `name;category;price;quantity;YYYY-MM-DD` record.
pub fn parse_line(line_number: usize, line: &str) -> Result<Product, FormatError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR as char).collect();
    decode_fields(line_number, &fields)
}

fn decode_fields(line_number: usize, raw: &[&str]) -> Result<Product, FormatError> {
    // Trailing empty segments do not count as fields.
    let end = raw.iter().rposition(|f| !f.is_empty()).map_or(0, |i| i + 1);
    let fields: Vec<&str> = raw[..end].iter().map(|f| f.trim()).collect();

    let [name, category, price, quantity, expiry] = fields[..] else {
        return Err(FormatError::FieldCount {
            line: line_number,
            found: fields.len(),
        });
    };

    let price = price.parse::<f64>().map_err(|source| FormatError::Price {
        line: line_number,
        value: price.to_string(),
        source,
    })?;
    let quantity = quantity
        .parse::<i32>()
        .map_err(|source| FormatError::Quantity {
            line: line_number,
            value: quantity.to_string(),
            source,
        })?;
    let expiry = NaiveDate::parse_from_str(expiry, EXPIRY_FORMAT).map_err(|source| {
        FormatError::Expiry {
            line: line_number,
            value: expiry.to_string(),
            source,
        }
    })?;

    Ok(Product::new(name, category, price, quantity, expiry))
}
