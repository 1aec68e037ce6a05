use crate::common::{history, utc_ts};
use fairvalue_rs::{Fetch, Lookback, StatementRows, SymbolData, normalize};
use rust_decimal_macros::dec;

fn data(history: Fetch<fairvalue_rs::PriceHistory>) -> SymbolData {
    SymbolData {
        symbol: "TEST".into(),
        income: Fetch::Data(StatementRows::default()),
        balance: Fetch::Empty,
        history,
    }
}

#[test]
fn dividends_are_summed_per_exchange_year() {
    let divs = [
        (utc_ts(2025, 2, 10, 14, 30), 0.25),
        (utc_ts(2025, 5, 12, 13, 30), 0.25),
        (utc_ts(2025, 8, 11, 13, 30), 0.26),
        // 2024-12-31 evening in New York
        (utc_ts(2025, 1, 1, 2, 0), 0.24),
        (utc_ts(2023, 11, 10, 14, 30), 0.24),
    ];
    let set = normalize(&data(Fetch::Data(history(&[], &divs))), &Lookback::for_year(2026));

    let d = &set.dividends;
    assert_eq!(d.len(), 10);
    assert_eq!(d.get(0).unwrap().year, 2026);
    assert_eq!(d.get(0).unwrap().value, dec!(0));
    assert_eq!(d.get(1).unwrap().value, dec!(0.76));
    assert_eq!(d.get(2).unwrap().value, dec!(0.24));
    assert_eq!(d.get(3).unwrap().value, dec!(0.24));
    assert_eq!(d.get(9).unwrap().year, 2017);
}

#[test]
fn no_dividend_history_is_ten_zero_years() {
    for fetch in [Fetch::Empty, Fetch::Failed("status 500".into())] {
        let set = normalize(&data(fetch), &Lookback::for_year(2026));
        assert_eq!(set.dividends.len(), 10);
        assert!(set.dividends.points().iter().all(|p| p.value == dec!(0)));
    }
}

#[test]
fn price_is_last_december_close_of_each_year() {
    let closes = [
        (utc_ts(2022, 12, 30, 21, 0), 129.93),
        (utc_ts(2023, 11, 30, 21, 0), 189.95),
        (utc_ts(2023, 12, 28, 21, 0), 193.58),
        (utc_ts(2023, 12, 29, 21, 0), 192.53),
        (utc_ts(2024, 12, 31, 21, 0), 250.42),
        (utc_ts(2025, 12, 30, 21, 0), 252.20),
        (utc_ts(2025, 12, 31, 21, 0), 250.10),
    ];
    let set = normalize(&data(Fetch::Data(history(&closes, &[]))), &Lookback::for_year(2025));

    let p = &set.price;
    assert_eq!(p.len(), 5);
    let values: Vec<_> = p.points().iter().map(|m| (m.year, m.value)).collect();
    assert_eq!(
        values,
        vec![
            (2025, dec!(250.10)),
            (2024, dec!(250.42)),
            (2023, dec!(192.53)),
            (2022, dec!(129.93)),
            (2021, dec!(0)),
        ]
    );
    assert!(!p.is_reported(4));
}

#[test]
fn running_year_without_a_december_close_is_a_placeholder() {
    let closes = [
        (utc_ts(2025, 12, 31, 21, 0), 250.42),
        (utc_ts(2026, 6, 1, 20, 0), 150.0),
    ];
    let set = normalize(&data(Fetch::Data(history(&closes, &[]))), &Lookback::for_year(2026));

    let now = set.price.get(0).unwrap();
    assert_eq!((now.year, now.value, now.reported), (2026, dec!(0), false));
    assert_eq!(set.price.get(1).unwrap().value, dec!(250.42));
}

#[test]
fn december_is_judged_on_the_exchange_clock() {
    // 1 January 03:00 UTC is still 31 December in New York
    let closes = [(utc_ts(2026, 1, 1, 3, 0), 99.0)];
    let set = normalize(&data(Fetch::Data(history(&closes, &[]))), &Lookback::for_year(2026));

    assert_eq!(set.price.get(1).unwrap().value, dec!(99.00));
    assert!(!set.price.is_reported(0));
}

#[test]
fn failed_history_gives_zero_prices() {
    let set = normalize(&data(Fetch::Failed("boom".into())), &Lookback::for_year(2025));
    assert_eq!(set.price.len(), 5);
    assert_eq!(set.price.reported_count(), 0);
}
