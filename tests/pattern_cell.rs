use regex_compose::{
    CompileOptions, Expr, PatternCell, PatternError, PatternResult, all, concat, exactly, literal,
    named, shorthand::digit,
};

fn iso_date() -> PatternResult<Expr> {
    let year = named(exactly(digit(), 4), "year")?;
    let month = named(exactly(digit(), 2), "month")?;
    let day = named(exactly(digit(), 2), "day")?;
    Ok(all(concat(
        concat(concat(year, "-"), concat(month, "-")),
        day,
    )))
}

fn shout() -> PatternResult<Expr> {
    Ok(literal("hey"))
}

fn bad_name() -> PatternResult<Expr> {
    Ok(named(literal("a"), "no good")?)
}

static ISO_DATE: PatternCell = PatternCell::new(iso_date);

#[test]
fn static_cell_compiles_lazily_and_once() {
    let pattern = ISO_DATE.get().expect("pattern should compile");
    let found = pattern.match_prefix("2024-03-09").expect("should match");
    assert_eq!(found.get("year"), Ok(Some("2024")));
    assert_eq!(found.get("month"), Ok(Some("03")));
    assert_eq!(found.get("day"), Ok(Some("09")));

    let again = ISO_DATE.get().expect("pattern should be cached");
    assert!(std::ptr::eq(pattern, again));
}

#[test]
fn racing_threads_all_observe_one_pattern() {
    let cell = PatternCell::new(iso_date);
    let addresses: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let pattern = cell.get().expect("pattern should compile");
                    assert!(pattern.match_prefix("1999-12-31").is_some());
                    pattern as *const _ as usize
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .collect()
    });

    assert!(cell.is_initialized());
    let stored = cell.get().expect("pattern should be cached") as *const _ as usize;
    assert!(addresses.iter().all(|&addr| addr == stored));
}

#[test]
fn cell_honours_custom_options() {
    let options = CompileOptions::builder()
        .case_insensitive(true)
        .build()
        .expect("options should build");
    let cell = PatternCell::with_options(shout, options);
    let pattern = cell.get().expect("pattern should compile");
    assert!(pattern.search("HEY there").is_some());
}

#[test]
fn cell_reports_construction_errors() {
    let cell = PatternCell::new(bad_name);
    assert!(matches!(cell.get(), Err(PatternError::Config(_))));
    assert!(!cell.is_initialized());
}
