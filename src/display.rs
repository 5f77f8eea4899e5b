use crate::calc::{StudentScores, round_off_1_decimal};
use crate::model::{Student, StudentId};
use crate::ranking::Ranking;
use crate::stats::ClassStatistics;
use serde::Serialize;
use std::collections::HashMap;
use std::io::{self, Write};

/// One line of the report, in ranked order.
#[derive(Debug, PartialEq, Serialize)]
pub struct Row<'a> {
    pub rank: usize,
    pub id: StudentId,
    pub nim: &'a str,
    pub name: &'a str,
    pub exam_average: f64,
    pub task_score: f64,
    pub proactiveness: f64,
    pub summary: f64,
}

pub fn rows<'a>(
    students: &'a [Student],
    scores: &[StudentScores],
    ranking: &Ranking,
) -> Vec<Row<'a>> {
    let students = students.iter().map(|s| (s.id, s)).collect::<HashMap<_, _>>();
    let scores = scores.iter().map(|s| (s.id, s)).collect::<HashMap<_, _>>();
    ranking
        .entries()
        .iter()
        .filter_map(|e| {
            let student: &'a Student = *students.get(&e.id)?;
            let scores = scores.get(&e.id)?;
            Some(Row {
                rank: e.rank,
                id: e.id,
                nim: &student.nim,
                name: &student.name,
                exam_average: round_off_1_decimal(scores.exam_average),
                task_score: round_off_1_decimal(scores.task_score),
                proactiveness: round_off_1_decimal(scores.proactiveness),
                summary: round_off_1_decimal(scores.summary),
            })
        })
        .collect()
}

pub fn display_ranking<W: Write>(out: &mut W, rows: &[Row]) -> io::Result<()> {
    writeln!(out, "Class ranking:")?;
    for r in rows {
        write!(out, "  {:>3}. {}", r.rank, r.name)?;
        if !r.nim.is_empty() {
            write!(out, " ({})", r.nim)?;
        }
        writeln!(
            out,
            ": summary {:.1} (exams {:.1}, tasks {:.1}, proactiveness {:.1})",
            r.summary, r.exam_average, r.task_score, r.proactiveness
        )?;
    }
    Ok(())
}

pub fn display_stats<W: Write>(
    out: &mut W,
    stats: &ClassStatistics,
    students: &[Student],
) -> io::Result<()> {
    writeln!(out, "Students: {}", stats.students)?;
    if stats.students == 0 {
        return Ok(());
    }
    for (label, d) in [
        ("Exam average", &stats.exam_average),
        ("Task score", &stats.task_score),
        ("Proactiveness", &stats.proactiveness),
        ("Summary score", &stats.summary),
    ] {
        writeln!(
            out,
            "  - {}: mean {:.1}, median {:.1}",
            label,
            round_off_1_decimal(d.mean),
            round_off_1_decimal(d.median)
        )?;
    }
    if let Some(top) = stats.top.and_then(|id| students.iter().find(|s| s.id == id)) {
        writeln!(out, "Top student: {}", top)?;
    }
    Ok(())
}

pub fn write_csv<W: Write>(out: W, rows: &[Row]) -> eyre::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{Weights, roster_scores};
    use crate::ranking::{TiePolicy, rank_scores};
    use crate::stats::class_statistics;

    fn roster() -> Vec<Student> {
        vec![
            Student::new(StudentId(1), "Ani", "2101001").with_exams(&[80.0, 90.0]),
            Student::new(StudentId(2), "Budi", "").with_exams(&[70.0]),
        ]
    }

    fn report_rows(students: &[Student]) -> Vec<Row<'_>> {
        let scores = roster_scores(students, &Weights::exam_only());
        let ranking = rank_scores(&scores, TiePolicy::Stable);
        rows(students, &scores, &ranking)
    }

    #[test]
    fn test_display_ranking() {
        let students = roster();
        let mut out = Vec::new();
        display_ranking(&mut out, &report_rows(&students)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Class ranking:\n\
             \x20   1. Ani (2101001): summary 85.0 (exams 85.0, tasks 0.0, proactiveness 0.0)\n\
             \x20   2. Budi: summary 70.0 (exams 70.0, tasks 0.0, proactiveness 0.0)\n"
        );
    }

    #[test]
    fn test_display_stats() {
        let students = roster();
        let stats = class_statistics(&roster_scores(&students, &Weights::exam_only()));
        let mut out = Vec::new();
        display_stats(&mut out, &stats, &students).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Students: 2\n"));
        assert!(out.contains("  - Exam average: mean 77.5, median 77.5\n"));
        assert!(out.ends_with("Top student: Ani (2101001)\n"));
    }

    #[test]
    fn test_display_stats_empty() {
        let mut out = Vec::new();
        display_stats(&mut out, &ClassStatistics::default(), &[]).unwrap();
        assert_eq!(out, b"Students: 0\n");
    }

    #[test]
    fn test_csv() {
        let students = roster();
        let mut out = Vec::new();
        write_csv(&mut out, &report_rows(&students)).unwrap();
        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("rank,id,nim,name,exam_average,task_score,proactiveness,summary")
        );
        assert_eq!(lines.next(), Some("1,1,2101001,Ani,85.0,0.0,0.0,85.0"));
        assert_eq!(lines.next(), Some("2,2,,Budi,70.0,0.0,0.0,70.0"));
        assert_eq!(lines.next(), None);
    }
}
