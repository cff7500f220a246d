use crate::global_settings::{GlobalSettings, Output};
use agenda_lib::IntervalSet;
use anyhow::Result;

pub fn agenda_view(agenda: &IntervalSet, globals: &GlobalSettings) -> Result<String> {
    Ok(match globals.output {
        Output::Text => agenda.to_string(),
        Output::Json => serde_json::to_string_pretty(agenda)?,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn globals(output: Output) -> GlobalSettings {
        GlobalSettings {
            output,
            verbosity: 0,
        }
    }

    #[test]
    fn test_text() {
        let ag: IntervalSet = "2013.12.01 9:00 11:00 | morning meeting\n\
                               2013.12.01 13:00 14:00 | afternoon meeting"
            .parse()
            .unwrap();
        assert_eq!(
            agenda_view(&ag, &globals(Output::Text)).unwrap(),
            "2013.12.01 09:00 11:00 | morning meeting\n\
             2013.12.01 13:00 14:00 | afternoon meeting"
        );
    }

    #[test]
    fn test_json() {
        let ag: IntervalSet = "2013.12.01 9:00 11:00 | morning meeting".parse().unwrap();
        let out = agenda_view(&ag, &globals(Output::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["begin"], "2013-12-01T09:00:00");
        assert_eq!(value[0]["description"], "morning meeting");
        assert_eq!(
            agenda_view(&IntervalSet::new(), &globals(Output::Json)).unwrap(),
            "[]"
        );
    }
}
