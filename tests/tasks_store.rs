#[cfg(test)]
mod tests {
    use chrono::Duration;
    use std::fs;
    use std::path::PathBuf;
    use task_timer::db::tasks::{TaskRecord, TaskStore};
    use task_timer::libs::clock::ManualClock;
    use task_timer::libs::registry::TaskRegistry;
    use task_timer::libs::task::TaskStatus;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const T0: i64 = 1_700_000_000;

    struct StoreTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks.csv");
            StoreTestContext { _temp_dir: temp_dir, path }
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_file_loads_empty(ctx: &mut StoreTestContext) {
        let store = TaskStore::new(&ctx.path);
        let registry = store.load_with_clock(ManualClock::at_epoch_seconds(T0)).unwrap();
        assert!(registry.is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_and_load_preserves_state(ctx: &mut StoreTestContext) {
        let clock = ManualClock::at_epoch_seconds(T0);
        let mut registry = TaskRegistry::with_clock(&clock);
        registry.create("Running").unwrap();
        registry.create("Paused, with comma").unwrap();
        registry.create("Idle").unwrap();

        registry.toggle("running").unwrap();
        registry.toggle("paused, with comma").unwrap();
        clock.advance(Duration::milliseconds(12_345));
        registry.toggle("paused, with comma").unwrap();

        let store = TaskStore::new(&ctx.path);
        store.save(&registry).unwrap();

        clock.advance(Duration::seconds(100));
        let loaded = store.load_with_clock(&clock).unwrap();

        let names: Vec<&str> = loaded.list().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Running", "Paused, with comma", "Idle"]);

        assert_eq!(loaded.get("running").unwrap().status(), TaskStatus::Active);
        assert_eq!(loaded.elapsed("running").unwrap(), Duration::milliseconds(112_345));

        assert_eq!(loaded.get("paused, with comma").unwrap().status(), TaskStatus::Paused);
        assert_eq!(loaded.elapsed("paused, with comma").unwrap(), Duration::milliseconds(12_345));

        assert_eq!(loaded.get("idle").unwrap().status(), TaskStatus::Off);
        assert_eq!(loaded.elapsed("idle").unwrap(), Duration::zero());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_saved_file_layout(ctx: &mut StoreTestContext) {
        let clock = ManualClock::at_epoch_seconds(T0);
        let mut registry = TaskRegistry::with_clock(&clock);
        registry.create("docs").unwrap();
        registry.toggle("docs").unwrap();
        clock.advance(Duration::milliseconds(1_500));
        registry.toggle("docs").unwrap();
        registry.create("idle").unwrap();

        TaskStore::new(&ctx.path).save(&registry).unwrap();

        let contents = fs::read_to_string(&ctx.path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "name,status,current_time,start_time,end_time,pre_pause_time");
        assert_eq!(lines[1], "docs,Paused,1700000001.5,1700000000.0,1700000001.5,");
        assert_eq!(lines[2], "idle,Off,1700000001.5,,,");
        assert!(!ctx.path.with_extension("csv.tmp").exists());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_legacy_pre_pause_time_is_folded_into_start(ctx: &mut StoreTestContext) {
        fs::write(
            &ctx.path,
            "name,status,current_time,start_time,end_time,pre_pause_time\n\
             legacy,Active,,1700000100,,40\n",
        )
        .unwrap();

        let clock = ManualClock::at_epoch_seconds(T0 + 110);
        let registry = TaskStore::new(&ctx.path).load_with_clock(&clock).unwrap();

        // 10s since the recorded start plus 40s banked before the pause
        assert_eq!(registry.elapsed("legacy").unwrap(), Duration::seconds(50));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_legacy_pre_pause_time_on_paused_row(ctx: &mut StoreTestContext) {
        fs::write(
            &ctx.path,
            "name,status,current_time,start_time,end_time,pre_pause_time\n\
             legacy,Paused,,1700000100,1700000130,40\n",
        )
        .unwrap();

        let clock = ManualClock::at_epoch_seconds(T0 + 500);
        let registry = TaskStore::new(&ctx.path).load_with_clock(&clock).unwrap();

        let task = registry.get("legacy").unwrap();
        assert_eq!(task.status(), TaskStatus::Paused);
        // 30s in the last session plus 40s banked, frozen while paused
        assert_eq!(registry.elapsed("legacy").unwrap(), Duration::seconds(70));
        assert_eq!(task.paused_at().unwrap().timestamp(), T0 + 130);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_legacy_pre_pause_time_on_off_row_is_dropped(ctx: &mut StoreTestContext) {
        fs::write(
            &ctx.path,
            "name,status,current_time,start_time,end_time,pre_pause_time\n\
             legacy,Off,,,,40\n",
        )
        .unwrap();

        let registry = TaskStore::new(&ctx.path)
            .load_with_clock(ManualClock::at_epoch_seconds(T0))
            .unwrap();

        let task = registry.get("legacy").unwrap();
        assert_eq!(task.status(), TaskStatus::Off);
        assert_eq!(task.start_reference(), None);
        assert_eq!(task.paused_at(), None);
        assert_eq!(registry.elapsed("legacy").unwrap(), Duration::zero());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_failed_save_removes_staging_file(ctx: &mut StoreTestContext) {
        // A directory in the way makes the final rename fail
        fs::create_dir(&ctx.path).unwrap();
        let mut registry = TaskRegistry::with_clock(ManualClock::at_epoch_seconds(T0));
        registry.create("one").unwrap();

        assert!(TaskStore::new(&ctx.path).save(&registry).is_err());
        assert!(!ctx.path.with_extension("csv.tmp").exists());
        assert!(ctx.path.is_dir());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_rejects_inconsistent_row(ctx: &mut StoreTestContext) {
        fs::write(
            &ctx.path,
            "name,status,current_time,start_time,end_time,pre_pause_time\n\
             ok,Off,,,,\n\
             broken,Paused,,1700000000,,\n",
        )
        .unwrap();

        let err = TaskStore::new(&ctx.path).load().unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_rejects_unknown_status(ctx: &mut StoreTestContext) {
        fs::write(
            &ctx.path,
            "name,status,current_time,start_time,end_time,pre_pause_time\n\
             odd,Running,,,,\n",
        )
        .unwrap();

        assert!(TaskStore::new(&ctx.path).load().is_err());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_load_rejects_duplicate_names(ctx: &mut StoreTestContext) {
        fs::write(
            &ctx.path,
            "name,status,current_time,start_time,end_time,pre_pause_time\n\
             Same,Off,,,,\n\
             same,Off,,,,\n",
        )
        .unwrap();

        assert!(TaskStore::new(&ctx.path).load().is_err());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_creates_parent_directory(ctx: &mut StoreTestContext) {
        let nested = ctx.path.parent().unwrap().join("nested").join("tasks.csv");
        let mut registry = TaskRegistry::with_clock(ManualClock::at_epoch_seconds(T0));
        registry.create("one").unwrap();

        let store = TaskStore::new(&nested);
        store.save(&registry).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_record_round_trip_through_task() {
        let record = TaskRecord {
            name: "docs".to_string(),
            status: TaskStatus::Paused,
            current_time: Some(1_700_000_500.0),
            start_time: Some(1_700_000_000.25),
            end_time: Some(1_700_000_010.75),
            pre_pause_time: None,
        };

        let task = record.into_task().unwrap();
        assert_eq!(task.status(), TaskStatus::Paused);
        assert_eq!(task.elapsed(task.paused_at().unwrap()), Duration::milliseconds(10_500));
    }
}
