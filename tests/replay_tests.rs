use freelook::script::{InputEvent, InputScript};
use freelook::{CameraConfig, Settings};
use glam::{Quat, Vec3};

const TOLERANCE: f32 = 1e-4;

const FLY_AROUND: &str = r#"{
    "eye": [0, 0, 0],
    "dir": [0, 0, -1],
    "events": [
        { "kind": "key", "key": "w" },
        { "kind": "key", "key": "W", "speed_scale": 2.0 },
        { "kind": "pointer_press", "button": "left", "state": "pressed", "x": 400, "y": 300 },
        { "kind": "pointer_move", "x": 220, "y": 300 },
        { "kind": "pointer_press", "button": "left", "state": "released", "x": 220, "y": 300 },
        { "kind": "key", "key": "d" },
        { "kind": "key", "key": "p" },
        { "kind": "analog", "x": 0.0, "y": 1.0 }
    ]
}"#;

#[cfg(test)]
mod replay_tests {
    use super::*;

    #[test]
    fn test_fly_around() {
        let script = InputScript::from_json_str(FLY_AROUND).unwrap();
        let report = script.run(&CameraConfig::default());
        let camera = &report.camera;

        // 2 + 4 forward, then a 90 degree left turn (180 px), strafe right
        // along -Z by 2, analog forward along -X by 1
        assert!(
            camera.direction().abs_diff_eq(Vec3::NEG_X, TOLERANCE),
            "direction {}",
            camera.direction()
        );
        assert!(
            camera.eye().abs_diff_eq(Vec3::new(-1.0, 0.0, -8.0), TOLERANCE),
            "eye {}",
            camera.eye()
        );
        assert_eq!(report.handled_keys, 3);
        assert_eq!(report.unhandled_keys, 1);
        assert_eq!(camera.last_pointer(), (220, 300));
    }

    #[test]
    fn test_script_speed_overrides_config() {
        let script = InputScript::from_json_str(
            r#"{ "eye": [0, 0, 0], "dir": [1, 0, 0], "speed": 0.25,
                 "events": [ { "kind": "key", "key": "w" } ] }"#,
        )
        .unwrap();

        let report = script.run(&CameraConfig::default());
        assert!(report.camera.eye().abs_diff_eq(Vec3::new(0.25, 0.0, 0.0), TOLERANCE));
    }

    #[test]
    fn test_settings_file_tuning_applies_to_replay() {
        let settings = Settings::from_json_str(r#"{ "camera": { "speed": 5.0 } }"#).unwrap();
        let script = InputScript {
            eye: [0.0, 0.0, 0.0],
            dir: [0.0, 0.0, -1.0],
            speed: None,
            events: vec![InputEvent::Key {
                key: 's',
                x: 0,
                y: 0,
                speed_scale: 1.0,
            }],
        };

        let report = script.run(&settings.camera);
        assert!(report.camera.eye().abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), TOLERANCE));
    }

    #[test]
    fn test_set_pose_to_pole_gives_identity_transform() {
        let script = InputScript::from_json_str(
            r#"{ "eye": [0, 0, 0], "dir": [0, 0, -1],
                 "events": [ { "kind": "set_pose", "eye": [1, 2, 3], "dir": [0, 1, 0] } ] }"#,
        )
        .unwrap();

        let transform = script.run(&CameraConfig::default()).camera.transform();
        assert_eq!(transform.orientation, Quat::IDENTITY);
        assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_load_missing_script_is_error() {
        assert!(InputScript::load("no/such/script.json").is_err());
    }
}
