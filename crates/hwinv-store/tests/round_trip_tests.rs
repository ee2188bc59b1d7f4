#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{add_durably, draft, memory_repo, reopen};
use proptest::num::f64::{NORMAL, POSITIVE, SUBNORMAL, ZERO};
use proptest::prelude::*;

fn text_field() -> impl Strategy<Value = String> {
    "\\PC{1,24}".prop_filter("field must not be blank", |s| !s.trim().is_empty())
}

fn monthly_cost() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0f64..1_000.0,
        0.0f64..1e15,
        POSITIVE | NORMAL | SUBNORMAL | ZERO,
    ]
}

fn run<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_added_item_survives_restart(
        name in text_field(),
        brand in text_field(),
        model in text_field(),
        serial in text_field(),
        cost in monthly_cost(),
        details in proptest::option::of("\\PC{0,40}"),
    ) {
        let (added, reloaded) = run(async {
            let (kv, mut repo) = memory_repo().await;
            let mut new_item = draft(&name, &brand, &model, &serial, cost);
            if let Some(details) = details {
                new_item = new_item.with_details(details);
            }
            let added = add_durably(&mut repo, new_item).await;
            let restarted = reopen(kv).await;
            (added, restarted.items().to_vec())
        });

        prop_assert_eq!(reloaded.len(), 1);
        prop_assert_eq!(
            reloaded[0].monthly_renting_cost.to_bits(),
            added.monthly_renting_cost.to_bits()
        );
        prop_assert_eq!(&reloaded[0], &added);
    }
}
