use raidtracker_types::combatant::{UnitCasualties, UnitTable};

/// Numeric rows in a unit block: the pre-battle count, then the losses.
const ROWS_PER_TABLE: usize = 2;

/// What a line did to the unit table state.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitLine {
    /// A header row was recognised, carrying this many unit names.
    Header(usize),
    /// A numeric row was buffered, the table is not complete yet.
    Row,
    /// The second numeric row arrived and the table is ready.
    Committed(UnitTable),
    Ignored,
}

/// Collects one unit table: a header row of unit names and two numeric rows.
#[derive(Debug, Default, Clone)]
pub struct UnitTableParser {
    headers: Vec<String>,
    rows: Vec<Vec<u32>>,
    collecting: bool,
}

impl UnitTableParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collecting(&self) -> bool {
        self.collecting
    }

    /// Drops any pending header and rows.
    pub fn reset(&mut self) {
        if self.collecting {
            tracing::trace!(rows = self.rows.len(), "Discarding incomplete unit table");
        }
        self.headers.clear();
        self.rows.clear();
        self.collecting = false;
    }

    pub fn feed(&mut self, line: &str, min_columns: usize) -> UnitLine {
        if !self.collecting {
            if !is_unit_header(line, min_columns) {
                return UnitLine::Ignored;
            }
            self.headers = line
                .split('\t')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
            self.rows.clear();
            self.collecting = true;
            tracing::debug!(units = ?self.headers, "Found unit headers");
            return UnitLine::Header(self.headers.len());
        }

        if !line.starts_with(|c: char| c.is_ascii_digit()) {
            return UnitLine::Ignored;
        }

        let row = parse_row(line);
        tracing::trace!(?row, "Added unit data row");
        self.rows.push(row);

        if self.rows.len() < ROWS_PER_TABLE {
            return UnitLine::Row;
        }
        UnitLine::Committed(self.commit())
    }

    fn commit(&mut self) -> UnitTable {
        let (initial, lost) = (&self.rows[0], &self.rows[1]);
        let table: UnitTable = self
            .headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let casualties = UnitCasualties::new(
                    initial.get(idx).copied().unwrap_or(0),
                    lost.get(idx).copied().unwrap_or(0),
                );
                (name.clone(), casualties)
            })
            .collect();

        tracing::debug!(units = table.len(), "Processed unit table");
        self.reset();
        table
    }
}

/// A header row has no digits, is tab-delimited, and has at least `min_columns` fields.
pub fn is_unit_header(line: &str, min_columns: usize) -> bool {
    !line.chars().any(|c| c.is_ascii_digit())
        && line.contains('\t')
        && line.split('\t').count() >= min_columns
}

/// Splits a numeric row on tabs. Unreadable cells count as 0.
pub fn parse_row(line: &str) -> Vec<u32> {
    line.split('\t').map(leading_integer).collect()
}

/// Reads the leading run of ASCII digits of `field`, ignoring leading whitespace.
fn leading_integer(field: &str) -> u32 {
    let field = field.trim_start();
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().unwrap_or(0)
}
