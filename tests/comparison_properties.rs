//! Property tests for the comparison statements and tile ordering

use dino_compare::compare::{
    compare_diet, compare_height, compare_weight, height_ratio, weight_ratio,
};
use dino_compare::core::types::DietMatching;
use dino_compare::entity::{Dinosaur, Human, HumanForm};
use dino_compare::facts::{select_fact, FactKind};
use dino_compare::tiles::{build_tile_order, TileEntry};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn dino(species: &str, weight: f64, height: f64, diet: &str) -> Dinosaur {
    Dinosaur {
        species: species.into(),
        weight,
        height,
        diet: diet.into(),
        fact: "A stored fact.".into(),
        r#where: "North America".into(),
        when: "Late Cretaceous".into(),
        always_show_fact: false,
    }
}

fn diet_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("herbivore".to_string()),
        Just("Herbivore".to_string()),
        Just("carnivore".to_string()),
        Just("omnivore".to_string()),
    ]
}

proptest! {
    #[test]
    fn weight_heavier_iff_rounded_ratio_above_one(
        dino_weight in 0.1f64..100_000.0,
        human_weight in 1.0f64..500.0,
    ) {
        let d = dino("Testosaurus", dino_weight, 100.0, "herbivore");
        let h = Human::new("Alex", 5.0, 6.0, human_weight, "herbivore");

        let text = compare_weight(&d, &h);
        let ratio = weight_ratio(&d, &h);
        prop_assert_eq!(text.contains("heavier"), ratio > 1.0);
        prop_assert_eq!(text.contains("thinner"), ratio <= 1.0);
        let ratio_text = format!("{:.1}", ratio);
        prop_assert!(text.contains(&ratio_text));
    }

    #[test]
    fn height_as_tall_iff_rounded_ratio_is_one(
        dino_height in 1.0f64..500.0,
        feet in 1u32..8,
        inches in 0u32..12,
    ) {
        let d = dino("Testosaurus", 1000.0, dino_height, "herbivore");
        let h = Human::new("Alex", feet as f64, inches as f64, 150.0, "herbivore");

        let text = compare_height(&d, &h);
        let ratio = height_ratio(&d, &h);
        prop_assert_eq!(text.contains("as tall as"), ratio == 1.0);
        if ratio != 1.0 {
            prop_assert_eq!(text.contains("taller"), ratio > 1.0);
            prop_assert_eq!(text.contains("shorter"), ratio < 1.0);
        }
    }

    #[test]
    fn diet_both_iff_exactly_equal(dino_diet in diet_strategy(), human_diet in diet_strategy()) {
        let d = dino("Testosaurus", 1000.0, 100.0, &dino_diet);
        let h = Human::new("Alex", 5.0, 6.0, 150.0, human_diet.clone());

        let text = compare_diet(&d, &h, DietMatching::Exact);
        prop_assert_eq!(text.starts_with("You are both"), dino_diet == human_diet);
    }

    #[test]
    fn tile_order_puts_human_fifth(n in 0usize..20) {
        let dinos: Vec<_> = (0..n)
            .map(|i| dino(&format!("D{}", i), 100.0, 100.0, "herbivore"))
            .collect();
        let human = Human::new("Alex", 5.0, 6.0, 150.0, "herbivore");

        let order = build_tile_order(&dinos, &human);
        prop_assert_eq!(order.len(), n + 1);

        let human_at = order.iter().position(|e| matches!(e, TileEntry::Human(_))).unwrap();
        prop_assert_eq!(human_at, n.min(4));

        let species: Vec<_> = order
            .iter()
            .filter_map(|e| match e {
                TileEntry::Dinosaur(d) => Some(d.species.clone()),
                TileEntry::Human(_) => None,
            })
            .collect();
        let expected: Vec<_> = dinos.iter().map(|d| d.species.clone()).collect();
        prop_assert_eq!(species, expected);
    }

    #[test]
    fn override_fact_ignores_the_draw(seed in any::<u64>()) {
        let mut pigeon = dino("Pigeon", 0.5, 9.0, "herbivore");
        pigeon.fact = "All birds are dinosaurs.".into();
        pigeon.always_show_fact = true;
        let human = Human::new("Alex", 5.0, 6.0, 150.0, "herbivore");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let entry = TileEntry::Dinosaur(&pigeon);
        let outcome = select_fact(&entry, &human, &mut rng, DietMatching::Exact).unwrap();
        prop_assert_eq!(outcome.kind, FactKind::Fact);
        prop_assert_eq!(outcome.text, "All birds are dinosaurs.");
    }

    #[test]
    fn non_numeric_weight_never_parses(weight in "[a-zA-Z ]{1,10}") {
        let form = HumanForm {
            name: "Alex".into(),
            feet: "5".into(),
            inches: "6".into(),
            weight,
            diet: "herbivore".into(),
        };
        prop_assert!(form.parse().is_err());
    }
}

#[test]
fn test_six_dinosaur_order() {
    let dinos: Vec<_> = (0..6)
        .map(|i| dino(&format!("dino{}", i), 100.0, 100.0, "herbivore"))
        .collect();
    let human = Human::new("Alex", 5.0, 6.0, 150.0, "herbivore");

    let labels: Vec<_> = build_tile_order(&dinos, &human)
        .iter()
        .map(|e| e.label())
        .collect();
    assert_eq!(
        labels,
        vec!["dino0", "dino1", "dino2", "dino3", "Alex", "dino4", "dino5"]
    );
}

#[test]
fn test_form_round_trip() {
    let form = HumanForm {
        name: "Alex".into(),
        feet: "5".into(),
        inches: "6".into(),
        weight: "150".into(),
        diet: "herbivore".into(),
    };
    let human = form.parse().unwrap();
    assert_eq!(human.weight, 150.0);
    assert_eq!(human.height_in_inches(), 66.0);
    assert_eq!(human.diet, "herbivore");
}
