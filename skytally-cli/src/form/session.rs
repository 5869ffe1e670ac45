use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        breakdown::ResultSet,
        estimator,
        usage::{Os, UsageInput},
    },
    pricing::rates::RateTable,
};

/// Focusable controls of the form, in tab order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    ComputeHours,
    StorageGb,
    BackupGb,
    DurationMonths,
    OsType,
    Licenses,
    Calculate,
}

impl Field {
    const fn next(self) -> Self {
        match self {
            Self::ComputeHours => Self::StorageGb,
            Self::StorageGb => Self::BackupGb,
            Self::BackupGb => Self::DurationMonths,
            Self::DurationMonths => Self::OsType,
            Self::OsType => Self::Licenses,
            Self::Licenses => Self::Calculate,
            Self::Calculate => Self::ComputeHours,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::ComputeHours => Self::Calculate,
            Self::StorageGb => Self::ComputeHours,
            Self::BackupGb => Self::StorageGb,
            Self::DurationMonths => Self::BackupGb,
            Self::OsType => Self::DurationMonths,
            Self::Licenses => Self::OsType,
            Self::Calculate => Self::Licenses,
        }
    }
}

/// One sitting at the form: the input buffers, the focus, and the latest
/// results. The estimator itself holds no state, this record owns everything
/// the screen shows.
#[must_use]
pub struct Session {
    pub rates: RateTable,
    pub compute_hours: String,
    pub storage_gb: String,
    pub backup_data_gb: String,
    pub duration_months: String,
    pub os_type: Os,
    pub num_licenses: String,
    pub focus: Field,
    results: Option<ResultSet>,
}

impl Session {
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates,
            compute_hours: String::from("0"),
            storage_gb: String::from("0"),
            backup_data_gb: String::from("0"),
            duration_months: String::from("0"),
            os_type: Os::default(),
            num_licenses: String::from("0"),
            focus: Field::ComputeHours,
            results: None,
        }
    }

    /// The latest calculation. Absent until the first one is triggered.
    pub const fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    /// Parse the buffers into a workload. An empty or non-numeric buffer
    /// counts as zero, while signs and decimals pass through as typed.
    pub fn usage(&self) -> UsageInput {
        UsageInput::builder()
            .compute_hours(parse_or_zero(&self.compute_hours))
            .storage_gb(parse_or_zero(&self.storage_gb))
            .backup_data_gb(parse_or_zero(&self.backup_data_gb))
            .duration_months(parse_or_zero(&self.duration_months))
            .os_type(self.os_type)
            .num_licenses(parse_or_zero(&self.num_licenses))
            .build()
    }

    /// The single trigger: price the current buffers on every platform and
    /// swap the previous results out wholesale.
    pub fn calculate(&mut self) {
        self.results = Some(estimator::estimate(&self.usage(), &self.rates));
    }

    /// Returns `true` when the session should end.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Enter => self.calculate(),
            KeyCode::Left | KeyCode::Right if self.focus == Field::OsType => {
                self.os_type = self.os_type.toggled();
            }
            KeyCode::Char(' ') if self.focus == Field::OsType => {
                self.os_type = self.os_type.toggled();
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.focused_buffer_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(character) => self.insert(character),
            _ => {}
        }
        false
    }

    /// Buffers take digits, and the signed fractional ones also take `.`
    /// and `-`. Everything else is dropped on the floor.
    fn insert(&mut self, character: char) {
        let allowed = character.is_ascii_digit()
            || (matches!(character, '.' | '-') && self.focus != Field::Licenses);
        if allowed && let Some(buffer) = self.focused_buffer_mut() {
            buffer.push(character);
        }
    }

    fn focused_buffer_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::ComputeHours => Some(&mut self.compute_hours),
            Field::StorageGb => Some(&mut self.storage_gb),
            Field::BackupGb => Some(&mut self.backup_data_gb),
            Field::DurationMonths => Some(&mut self.duration_months),
            Field::Licenses => Some(&mut self.num_licenses),
            Field::OsType | Field::Calculate => None,
        }
    }
}

fn parse_or_zero<T: Default + FromStr>(buffer: &str) -> T {
    buffer.trim().parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use skytally_quantities::{
        storage::Gigabytes,
        time::{Hours, Months},
    };

    use super::*;
    use crate::pricing::provider::Provider;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn empty_and_garbled_buffers_count_as_zero() {
        let mut session = Session::new(RateTable::default());
        session.compute_hours = String::new();
        session.storage_gb = String::from("abc");
        let usage = session.usage();
        assert_eq!(usage.compute_hours, Hours::ZERO);
        assert_eq!(usage.storage_gb, Gigabytes::ZERO);
    }

    #[test]
    fn signed_and_fractional_input_parses_as_typed() {
        let mut session = Session::new(RateTable::default());
        session.duration_months = String::from("-1.5");
        assert_eq!(session.usage().duration_months, Months(-1.5));
    }

    #[test]
    fn results_appear_on_the_first_enter() {
        let mut session = Session::new(RateTable::default());
        assert!(session.results().is_none());
        assert!(!session.handle_key(key(KeyCode::Enter)));
        assert_eq!(session.results().unwrap().len(), 4);
    }

    #[test]
    fn focus_cycles_through_every_control() {
        let mut session = Session::new(RateTable::default());
        for expected in [
            Field::StorageGb,
            Field::BackupGb,
            Field::DurationMonths,
            Field::OsType,
            Field::Licenses,
            Field::Calculate,
            Field::ComputeHours,
        ] {
            session.handle_key(key(KeyCode::Tab));
            assert_eq!(session.focus, expected);
        }
        session.handle_key(key(KeyCode::BackTab));
        assert_eq!(session.focus, Field::Calculate);
    }

    #[test]
    fn typing_edits_the_focused_buffer() {
        let mut session = Session::new(RateTable::default());
        session.compute_hours.clear();
        for character in "12.5".chars() {
            session.handle_key(key(KeyCode::Char(character)));
        }
        assert_eq!(session.compute_hours, "12.5");
        session.handle_key(key(KeyCode::Backspace));
        assert_eq!(session.compute_hours, "12.");
    }

    #[test]
    fn letters_never_reach_a_numeric_buffer() {
        let mut session = Session::new(RateTable::default());
        session.handle_key(key(KeyCode::Char('x')));
        assert_eq!(session.compute_hours, "0");
    }

    #[test]
    fn license_buffer_rejects_signs_and_decimals() {
        let mut session = Session::new(RateTable::default());
        session.focus = Field::Licenses;
        session.num_licenses.clear();
        for character in "-2.5".chars() {
            session.handle_key(key(KeyCode::Char(character)));
        }
        assert_eq!(session.num_licenses, "25");
    }

    #[test]
    fn os_selector_toggles_in_place() {
        let mut session = Session::new(RateTable::default());
        session.focus = Field::OsType;
        assert_eq!(session.os_type, Os::Windows);
        session.handle_key(key(KeyCode::Right));
        assert_eq!(session.os_type, Os::Linux);
        session.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(session.os_type, Os::Windows);
    }

    #[test]
    fn escape_and_ctrl_c_end_the_session() {
        let mut session = Session::new(RateTable::default());
        assert!(session.handle_key(key(KeyCode::Esc)));
        assert!(session.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn recalculation_replaces_the_results_wholesale() {
        let mut session = Session::new(RateTable::default());
        session.storage_gb = String::from("100");
        session.duration_months = String::from("2");
        session.calculate();
        let first = session.results().unwrap().get(Provider::Aws).unwrap().total;
        session.duration_months = String::from("4");
        session.calculate();
        let second = session.results().unwrap().get(Provider::Aws).unwrap().total;
        assert!(second > first);
    }
}
