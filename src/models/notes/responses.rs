use serde::Serialize;
use ts_rs::TS;

use super::entities::Note;
use crate::grading::{self, Computed, GradeBand, GradingSettings};
use crate::models::common::choices::{NOTE_PERIODS, label_for};

// 成绩列表行的显示信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/note.ts")]
pub struct NoteDisplay {
    pub eleve: Option<String>,
    // /20 平均分，满分缺失或为零时为 null
    pub moyenne: Computed,
    pub moyenne_label: String,
    pub band: Option<GradeBand>,
    pub color: String,
    pub periode_label: String,
}

impl NoteDisplay {
    pub fn of(note: &Note, settings: &GradingSettings) -> Self {
        let moyenne = grading::note_average(note.point_obtenu, note.ponderation, settings);
        let band = GradeBand::of(moyenne);
        let eleve = match (&note.nom_eleve, &note.prenom_eleve) {
            (Some(nom), Some(prenom)) => Some(format!("{nom} {prenom}")),
            _ => None,
        };
        Self {
            eleve,
            moyenne,
            moyenne_label: moyenne.display(),
            band,
            color: band.map(GradeBand::color).unwrap_or("default").to_string(),
            periode_label: label_for(NOTE_PERIODS, note.periode.as_deref().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_display() {
        let note = Note {
            nom_eleve: Some("Leclerc".into()),
            prenom_eleve: Some("Sophie".into()),
            periode: Some("TRIMESTRE_1".into()),
            point_obtenu: Some(14.0),
            ponderation: Some(20.0),
            ..Default::default()
        };
        let display = NoteDisplay::of(&note, &GradingSettings::default());
        assert_eq!(display.moyenne, Computed::Value(14.0));
        assert_eq!(display.moyenne_label, "14.00");
        assert_eq!(display.band, Some(GradeBand::Good));
        assert_eq!(display.color, "primary");
        assert_eq!(display.eleve.as_deref(), Some("Leclerc Sophie"));
        assert_eq!(display.periode_label, "Premier trimestre");
    }

    #[test]
    fn test_note_without_max_points() {
        let note = Note {
            point_obtenu: Some(14.0),
            ponderation: Some(0.0),
            ..Default::default()
        };
        let display = NoteDisplay::of(&note, &GradingSettings::default());
        assert_eq!(display.moyenne, Computed::NotComputed);
        assert_eq!(display.moyenne_label, "N/A");
        assert_eq!(display.band, None);
        assert_eq!(display.color, "default");
    }
}
