use crate::presentation::Style;
use anyhow::Result;
use writerops_store::Store;

pub fn handle(store: &Store, style: Style) -> Result<()> {
    let highlights = store.load_highlights()?;
    if highlights.is_empty() {
        println!("하이라이트 없음");
        return Ok(());
    }

    for highlight in &highlights {
        println!("{}", style.highlight_line(highlight));
    }
    println!("총 {}개", highlights.len());
    Ok(())
}
