use crate::presentation::Style;
use anyhow::Result;
use chrono::NaiveDate;
use writerops_runtime::ops;
use writerops_store::Store;

pub fn handle(store: &Store, date: NaiveDate, style: Style) -> Result<()> {
    let view = ops::show_day(store, date)?;

    match &view.record {
        Some(record) => {
            for line in style.record_lines(record) {
                println!("{}", line);
            }
        }
        None => println!("{} 기록 없음", view.date),
    }

    let today = view.record.as_ref().map(|r| r.char_count).unwrap_or(0);
    println!("{}", style.progress_line(today, &view.progress));

    if view.has_drift() {
        println!(
            "참고: 일일 기록 합계 {}자와 누적 카운터 {}자가 다릅니다",
            view.recorded_total, view.progress.total_written
        );
    }
    Ok(())
}
