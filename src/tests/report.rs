use crate::{report::Report, stats::SummaryRow};

const HEADER: &str = "Character\tTotal Rolls\tAverage Roll\tCrit Success\tCrit Fail\t1\t2\t3\t4\t5\t6\t7\t8\t9\t10\t11\t12\t13\t14\t15\t16\t17\t18\t19\t20";

fn row(name: &str, total_rolls: usize, average: f64) -> SummaryRow {
	SummaryRow {
		name: name.to_owned(),
		total_rolls,
		average,
		crit_successes: 0,
		crit_fails: 0,
		histogram: [0; 20],
	}
}

fn render(report: &Report) -> String {
	let mut out = Vec::new();
	report.write_to(&mut out).unwrap();
	String::from_utf8(out).unwrap()
}

#[test]
fn header_only() {
	assert_eq!(render(&Report::new(Vec::new())), format!("{HEADER}\n"));
}

#[test]
fn most_rolls_first() {
	let report = Report::new(vec![row("A", 5, 10.0), row("B", 10, 10.0)]);
	let names = report.rows().iter().map(|row| row.name.as_str()).collect::<Vec<_>>();
	assert_eq!(names, ["B", "A"]);

	let output = render(&report);
	let a = output.find("\nA\t").unwrap();
	let b = output.find("\nB\t").unwrap();
	assert!(b < a);
}

#[test]
fn ties_keep_input_order() {
	let report = Report::new(vec![row("C", 3, 1.0), row("A", 7, 1.0), row("B", 3, 1.0)]);
	let names = report.rows().iter().map(|row| row.name.as_str()).collect::<Vec<_>>();
	assert_eq!(names, ["A", "C", "B"]);
}

#[test]
fn row_layout() {
	let mut histogram = [0; 20];
	histogram[0] = 1;
	histogram[9] = 1;
	histogram[19] = 1;
	let report = Report::new(vec![SummaryRow {
		name: "Alice".to_owned(),
		total_rolls: 3,
		average: 31.0 / 3.0,
		crit_successes: 1,
		crit_fails: 1,
		histogram,
	}]);

	let output = render(&report);
	let lines = output.lines().collect::<Vec<_>>();
	assert_eq!(lines.len(), 2);
	assert_eq!(lines[0], HEADER);
	assert_eq!(
		lines[1],
		"Alice\t3\t10.33\t1\t1\t1\t0\t0\t0\t0\t0\t0\t0\t0\t1\t0\t0\t0\t0\t0\t0\t0\t0\t0\t1"
	);
	assert_eq!(lines[1].split('\t').count(), 25);
}

#[test]
fn averages_have_two_decimals() {
	let output = render(&Report::new(vec![row("Zero", 0, 0.0), row("Whole", 2, 15.0), row("Long", 3, 2.0 / 3.0)]));
	let averages = output
		.lines()
		.skip(1)
		.map(|line| line.split('\t').nth(2).unwrap().to_owned())
		.collect::<Vec<_>>();
	assert_eq!(averages, ["0.67", "15.00", "0.00"]);
}
