//! Property tests for the binary patch operation.

use proptest::prelude::*;

use nier_exper::{BinarySlotRepository, Experience, ExperienceRepository, SaveOptions, Slot};

const OFFSET: usize = BinarySlotRepository::LEVEL_OFFSET as usize;

fn make_slot_file(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("SlotData_0.dat");
    let bytes: Vec<u8> = (0..OFFSET + 64).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, bytes).unwrap();
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: For any i32 value, patch-then-load reads back that value.
    #[test]
    fn property_patch_then_load_round_trips(points in any::<i32>()) {
        let dir = tempfile::tempdir().unwrap();
        let path = make_slot_file(dir.path());
        let slot = Slot::new(&path);
        let repo = BinarySlotRepository::new(&slot);

        repo.save(&Experience::new(points), &SaveOptions { backup: false }).unwrap();

        prop_assert_eq!(repo.load().unwrap().points(), points);
    }

    /// PROPERTY: Patching only ever touches the 4 bytes at the EXP offset.
    #[test]
    fn property_patch_touches_only_exp_window(points in any::<i32>()) {
        let dir = tempfile::tempdir().unwrap();
        let path = make_slot_file(dir.path());
        let before = std::fs::read(&path).unwrap();
        let slot = Slot::new(&path);
        let repo = BinarySlotRepository::new(&slot);

        repo.save(&Experience::new(points), &SaveOptions { backup: false }).unwrap();

        let after = std::fs::read(&path).unwrap();
        let points_le = points.to_le_bytes();
        prop_assert_eq!(after.len(), before.len());
        prop_assert_eq!(&after[..OFFSET], &before[..OFFSET]);
        prop_assert_eq!(&after[OFFSET..OFFSET + 4], points_le.as_slice());
        prop_assert_eq!(&after[OFFSET + 4..], &before[OFFSET + 4..]);
    }

    /// PROPERTY: Backed-up saves never collide; each save gets its own
    /// directory and the intermediate backup preserves the prior value.
    #[test]
    fn property_backups_never_collide(v1 in any::<i32>(), v2 in any::<i32>()) {
        let dir = tempfile::tempdir().unwrap();
        let path = make_slot_file(dir.path());
        let slot = Slot::new(&path);
        let repo = BinarySlotRepository::new(&slot);

        repo.save(&Experience::new(v1), &SaveOptions::default()).unwrap();
        repo.save(&Experience::new(v2), &SaveOptions::default()).unwrap();

        let backups: Vec<_> = std::fs::read_dir(
            dir.path().join(BinarySlotRepository::BACKUP_DIR_NAME),
        )
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
        prop_assert_eq!(backups.len(), 2);

        let intermediate: Vec<i32> = backups
            .iter()
            .map(|d| {
                let bytes = std::fs::read(d.join("SlotData_0.dat")).unwrap();
                i32::from_le_bytes(bytes[OFFSET..OFFSET + 4].try_into().unwrap())
            })
            .collect();
        prop_assert!(intermediate.contains(&v1));

        prop_assert_eq!(repo.load().unwrap().points(), v2);
    }
}
