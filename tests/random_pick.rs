use rand::{SeedableRng, rngs::StdRng};
use recipe_share_api::services::recipe_service::pick_offset;

#[test]
fn empty_store_has_no_pick() {
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(pick_offset(&mut rng, 0), None);
}

#[test]
fn single_recipe_is_always_picked() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        assert_eq!(pick_offset(&mut rng, 1), Some(0));
    }
}

#[test]
fn picks_are_roughly_uniform() {
    const N: u64 = 5;
    const DRAWS: usize = 10_000;

    let mut rng = StdRng::seed_from_u64(42);
    let mut hits = [0usize; N as usize];
    for _ in 0..DRAWS {
        let offset = pick_offset(&mut rng, N).expect("offset");
        assert!(offset < N);
        hits[offset as usize] += 1;
    }

    let expected = DRAWS / N as usize;
    for count in hits {
        assert!(
            count.abs_diff(expected) < expected / 10,
            "skewed distribution: {hits:?}"
        );
    }
}
