use crate::handlers::display_path;
use anyhow::Result;
use chrono::NaiveDate;
use writerops_engine::Period;
use writerops_runtime::Classifier;
use writerops_runtime::ops;
use writerops_store::Store;

pub fn weekly(store: &Store, date: NaiveDate) -> Result<()> {
    let outcome = ops::weekly_report(store, date)?;
    print!("{}", outcome.text);
    println!();
    println!("리포트 저장: {}", display_path(store, &outcome.path));
    Ok(())
}

pub fn monthly(store: &Store, classifier: &Classifier<'_>, period: Period) -> Result<()> {
    let outcome = ops::monthly_report(store, classifier, period)?;
    print!("{}", outcome.text);
    println!();
    println!("리포트 저장: {}", display_path(store, &outcome.path));
    Ok(())
}
