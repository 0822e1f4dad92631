//! The static booklet manifest: which PDF belongs to which exam sitting.
//!
//! Everything here is a compile-time constant. The manifest is a plain data
//! table rather than a config file on purpose — the set of published
//! bessatsu booklets changes once a year at most, and a table in source
//! keeps the exam-number/session/filename mapping reviewable in one place.

use std::fmt;
use std::path::{Path, PathBuf};

/// Which sitting of the exam a booklet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Session {
    Morning,
    Afternoon,
}

impl Session {
    /// Directory segment used in output paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Session::Morning => "morning",
            Session::Afternoon => "afternoon",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the booklet manifest.
///
/// Immutable by construction; entries only ever live in [`MANIFEST`] or in
/// test fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BessatsuEntry {
    /// Exam number (the "29" in "the 29th national exam").
    pub exam_number: u32,
    /// Morning or afternoon sitting.
    pub session: Session,
    /// Source PDF filename, relative to the input directory.
    pub filename: &'static str,
}

impl BessatsuEntry {
    pub const fn new(exam_number: u32, session: Session, filename: &'static str) -> Self {
        Self {
            exam_number,
            session,
            filename,
        }
    }

    /// Resolved input path: `<input_dir>/<filename>`.
    pub fn pdf_path(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(self.filename)
    }

    /// Resolved output directory: `<output_root>/<exam_number>/<session>`.
    ///
    /// This is a pure function of `(exam_number, session)` — two entries
    /// collide on it only by configuration error, with one exception noted
    /// on [`MANIFEST`].
    pub fn output_subdir(&self, output_root: &Path) -> PathBuf {
        output_root
            .join(self.exam_number.to_string())
            .join(self.session.as_str())
    }
}

/// The fixed list of booklets to convert, in conversion order.
///
/// Order is not semantically meaningful but is deterministic so two runs
/// produce identical logs. The exam-33 afternoon entry deliberately reuses
/// the morning PDF — no separate afternoon booklet was published that year.
pub const MANIFEST: &[BessatsuEntry] = &[
    BessatsuEntry::new(29, Session::Morning, "2021_29_gozen_bessatsu.pdf"),
    BessatsuEntry::new(29, Session::Afternoon, "2021_29_gogo_bessatsu.pdf"),
    BessatsuEntry::new(30, Session::Morning, "2022_30_gozen_bessatsu.pdf"),
    BessatsuEntry::new(30, Session::Afternoon, "2022_30_gogo_bessatsu.pdf"),
    BessatsuEntry::new(31, Session::Morning, "2023_31_gozen_bessatsu.pdf"),
    BessatsuEntry::new(31, Session::Afternoon, "2023_31_gogo_bessatsu.pdf"),
    BessatsuEntry::new(32, Session::Morning, "2024_32_gozen_bessatsu.pdf"),
    BessatsuEntry::new(32, Session::Afternoon, "2024_32_gogo_bessatsu.pdf"),
    BessatsuEntry::new(33, Session::Morning, "2025_33_gozen_bessatsu.pdf"),
    // The afternoon sitting shares the morning booklet.
    BessatsuEntry::new(33, Session::Afternoon, "2025_33_gozen_bessatsu.pdf"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_has_ten_entries() {
        assert_eq!(MANIFEST.len(), 10);
    }

    #[test]
    fn manifest_covers_exams_29_to_33_both_sessions() {
        for exam in 29..=33 {
            for session in [Session::Morning, Session::Afternoon] {
                assert!(
                    MANIFEST
                        .iter()
                        .any(|e| e.exam_number == exam && e.session == session),
                    "missing entry for exam {exam} {session}"
                );
            }
        }
    }

    #[test]
    fn exam_33_afternoon_reuses_morning_booklet() {
        let morning = MANIFEST
            .iter()
            .find(|e| e.exam_number == 33 && e.session == Session::Morning)
            .unwrap();
        let afternoon = MANIFEST
            .iter()
            .find(|e| e.exam_number == 33 && e.session == Session::Afternoon)
            .unwrap();
        assert_eq!(morning.filename, afternoon.filename);
    }

    #[test]
    fn output_subdir_is_exam_then_session() {
        let entry = BessatsuEntry::new(29, Session::Afternoon, "x.pdf");
        let dir = entry.output_subdir(Path::new("out"));
        assert_eq!(dir, Path::new("out").join("29").join("afternoon"));
    }

    #[test]
    fn output_subdirs_are_unique() {
        use std::collections::HashMap;
        let mut seen: HashMap<PathBuf, &str> = HashMap::new();
        for entry in MANIFEST {
            let key = entry.output_subdir(Path::new("out"));
            assert!(
                seen.insert(key.clone(), entry.filename).is_none(),
                "two entries map to {}",
                key.display()
            );
        }
        // The shared *source* file is allowed; shared *output* directories are not.
        assert_eq!(seen.len(), MANIFEST.len());
    }

    #[test]
    fn pdf_path_joins_input_dir() {
        let entry = &MANIFEST[0];
        assert_eq!(
            entry.pdf_path(Path::new("public/pdfs")),
            Path::new("public/pdfs/2021_29_gozen_bessatsu.pdf")
        );
    }

    #[test]
    fn session_display_matches_directory_segment() {
        assert_eq!(Session::Morning.to_string(), "morning");
        assert_eq!(Session::Afternoon.to_string(), "afternoon");
    }
}
