//! Property-based tests for schematic indexing and resolution

use aoc2023::schematic::{gear_ratio_sum, part_sum, Schematic};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Without symbols nothing can be claimed.
    #[test]
    fn prop_no_symbols_no_total(text in "[0-9.]{0,12}(\n[0-9.]{0,12}){0,8}") {
        prop_assert_eq!(part_sum(&text), 0);
        prop_assert_eq!(gear_ratio_sum(&text), 0);
    }

    /// Without digits there is nothing to claim.
    #[test]
    fn prop_no_digits_no_total(text in "[.#*$+/=@-]{0,12}(\n[.#*$+/=@-]{0,12}){0,8}") {
        prop_assert_eq!(part_sum(&text), 0);
        prop_assert_eq!(gear_ratio_sum(&text), 0);
    }

    /// The total is exactly the sum of the claimed numbers, and a second
    /// pass over the same schematic finds nothing left.
    #[test]
    fn prop_claims_are_permanent(text in "[0-9.*#]{0,12}(\n[0-9.*#]{0,12}){0,8}") {
        let mut schematic = Schematic::index(&text);
        let total = schematic.sum_adjacent_parts();
        let claimed: u64 = schematic
            .numbers()
            .filter(|(_, number)| number.is_claimed())
            .map(|(_, number)| number.value())
            .sum();
        prop_assert_eq!(total, claimed);
        prop_assert_eq!(schematic.sum_adjacent_parts(), 0);
    }

    /// Every claimed number touches at least one symbol.
    #[test]
    fn prop_claimed_numbers_touch_a_symbol(text in "[0-9.*#]{0,12}(\n[0-9.*#]{0,12}){0,8}") {
        let mut schematic = Schematic::index(&text);
        schematic.sum_adjacent_parts();
        for (_, number) in schematic.numbers() {
            let touches = schematic.symbols().iter().any(|symbol| {
                symbol.row().abs_diff(number.row()) <= 1 && number.is_adjacent(symbol.column())
            });
            prop_assert_eq!(number.is_claimed(), touches);
        }
    }

    #[test]
    fn prop_indexing_is_repeatable(text in "[0-9.*#]{0,12}(\n[0-9.*#]{0,12}){0,8}") {
        prop_assert_eq!(Schematic::index(&text), Schematic::index(&text));
    }

    /// Numbers directly beside a symbol on the same row count once.
    #[test]
    fn prop_same_row_neighbours(a in 0u64..100_000, b in 0u64..100_000) {
        prop_assert_eq!(part_sum(&format!("{a}#")), a);
        prop_assert_eq!(part_sum(&format!("#{b}")), b);
        prop_assert_eq!(part_sum(&format!("{a}##{b}")), a + b);
    }

    #[test]
    fn prop_gear_with_two_numbers(a in 0u64..10_000, b in 0u64..10_000) {
        prop_assert_eq!(gear_ratio_sum(&format!("{a}*{b}")), a * b);
        prop_assert_eq!(gear_ratio_sum(&format!("{a}.\n*.\n{b}.")), a * b);
    }

    #[test]
    fn prop_gear_with_one_or_three_numbers(
        a in 0u64..10_000,
        b in 0u64..10_000,
        c in 0u64..10_000,
    ) {
        prop_assert_eq!(gear_ratio_sum(&format!("{a}*.")), 0);
        let pad = ".".repeat(a.to_string().len());
        prop_assert_eq!(gear_ratio_sum(&format!("{a}*{b}\n{pad}{c}")), 0);
    }
}
