use raidtracker_types::{combatant::Combatant, report::Report, section::SectionMarker};

use crate::{
    bounty, entity, header, information,
    options::ParseOptions,
    statistics::StatisticsParser,
    units::{UnitLine, UnitTableParser},
};

/// Lines at the start of the report that form the header.
const HEADER_LINES: usize = 2;

/// The section the scan is currently in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Attacker,
    Defender,
    Statistics,
    Information,
    Bounty,
}

impl From<SectionMarker> for Section {
    fn from(marker: SectionMarker) -> Self {
        match marker {
            SectionMarker::Attacker => Section::Attacker,
            SectionMarker::Defender => Section::Defender,
            SectionMarker::Statistics => Section::Statistics,
            SectionMarker::Information => Section::Information,
            SectionMarker::Bounty => Section::Bounty,
        }
    }
}

/// Scan state for a single parse call.
///
/// Lines are fed left to right; the report under construction is returned by [`finish`].
///
/// [`finish`]: ReportAssembler::finish
pub struct ReportAssembler<'a> {
    options: &'a ParseOptions,
    report: Report,
    section: Section,
    lines_seen: usize,
    units: UnitTableParser,
    statistics: StatisticsParser,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            report: Report::default(),
            section: Section::None,
            lines_seen: 0,
            units: UnitTableParser::new(),
            statistics: StatisticsParser::new(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Feeds every line and returns the finished report.
    pub fn run(mut self, lines: &[&str]) -> Report {
        tracing::debug!(lines = lines.len(), "Parsing attack report");
        for line in lines {
            self.feed(line);
        }
        self.finish()
    }

    /// Feeds one normalized line.
    pub fn feed(&mut self, line: &str) {
        let index = self.lines_seen;
        self.lines_seen += 1;

        if index < HEADER_LINES {
            header::apply_header_line(&mut self.report.header, index, line);
        }

        match SectionMarker::from_line(line) {
            // column labels of the statistics table, not section changes
            Some(SectionMarker::Attacker | SectionMarker::Defender)
                if self.section == Section::Statistics => {}
            Some(marker) => {
                self.enter(marker);
                return;
            }
            None => {}
        }

        match self.section {
            // preamble before the first marker, only the header reads it
            Section::None => {}
            Section::Attacker | Section::Defender => self.combatant_line(line),
            Section::Statistics => {
                self.statistics
                    .feed(&mut self.report.statistics, line, self.options);
            }
            Section::Information => {
                information::append_information(&mut self.report.attacker, line);
            }
            Section::Bounty => {
                let bounty = self
                    .report
                    .attacker
                    .bounty
                    .get_or_insert_with(Default::default);
                bounty::apply_bounty_line(bounty, line);
            }
        }
    }

    pub fn finish(self) -> Report {
        tracing::debug!(
            attacker_units = self.report.attacker.units.len(),
            defenders = self.report.defenders.len(),
            statistics = self.report.statistics.len(),
            "Final parsed report"
        );
        self.report
    }

    fn enter(&mut self, marker: SectionMarker) {
        // a marker always closes the pending unit table
        self.units.reset();
        if marker == SectionMarker::Defender {
            self.report.defenders.push(Combatant::default());
        }
        self.section = marker.into();
        tracing::debug!(
            section = %marker,
            defenders = self.report.defenders.len(),
            "Found section"
        );
    }

    fn active_combatant(&mut self) -> Option<&mut Combatant> {
        match self.section {
            Section::Attacker => Some(&mut self.report.attacker),
            Section::Defender => self.report.defenders.last_mut(),
            _ => None,
        }
    }

    fn combatant_line(&mut self, line: &str) {
        let min_columns = self.options.min_unit_columns;
        if let Some(combatant) = self.active_combatant() {
            entity::apply_identity(combatant, line);
        }

        match self.units.feed(line, min_columns) {
            UnitLine::Committed(table) => {
                if let Some(combatant) = self.active_combatant() {
                    combatant.units = table;
                }
            }
            UnitLine::Header(_) | UnitLine::Row | UnitLine::Ignored => {}
        }
    }
}
