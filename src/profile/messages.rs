//! The built-in message table.
//!
//! Global profile messages with the scale, offset and semantics of each
//! field. Manufacturer-specific messages seen on watches are included next
//! to the standard ones. Messages are sorted by number.

use super::types::*;
use super::{EnumTable, FieldSchema, Kind, MessageSchema};
use crate::sans::data::BaseType::{self, *};

const TIME: Kind = Kind::Timestamp;
const COORD: Kind = Kind::Coordinate;
const ARRAY: Kind = Kind::Array;
const BOOL: Kind = Kind::Bool;

const fn f(number: u8, name: &'static str, base_type: BaseType) -> FieldSchema {
    FieldSchema::new(number, name, base_type)
}

const fn e(table: &'static EnumTable) -> Kind {
    Kind::Enum(table)
}

macro_rules! message {
    ($number:literal, $name:literal, [$($field:expr,)*]) => {
        MessageSchema {
            number: $number,
            name: $name,
            fields: &[$($field,)*],
        }
    };
}

pub static MESSAGES: &[MessageSchema] = &[
    message!(0, "file_id", [
        f(0, "type", Enum).kind(e(&FILE)),
        f(1, "manufacturer", UInt16).kind(e(&MANUFACTURER)),
        f(2, "product", UInt16),
        f(3, "serial_number", UInt32Z),
        f(4, "time_created", UInt32).kind(TIME),
        f(5, "number", UInt16),
        f(6, "manufacturer_partner", UInt16).kind(e(&MANUFACTURER)),
        f(8, "product_name", String).sized(20),
    ]),
    message!(1, "capabilities", [
        f(0, "languages", UInt8Z).sized(4).kind(ARRAY),
        f(1, "sports", UInt8Z).kind(ARRAY),
        f(21, "workouts_supported", UInt32Z),
        f(23, "connectivity_supported", UInt32Z),
    ]),
    message!(2, "device_settings", [
        f(0, "active_time_zone", UInt8),
        f(1, "utc_offset", UInt32),
        f(2, "time_offset", UInt32).sized(8).kind(ARRAY),
        f(4, "time_mode", Enum).sized(2).kind(ARRAY),
        f(5, "time_zone_offset", SInt8).sized(2).scaled(4.0, 0.0).kind(ARRAY),
        f(8, "alarms_time", UInt16).kind(ARRAY),
        f(9, "alarms_unk5", Enum).kind(ARRAY),
        f(12, "backlight_mode", Enum),
        f(28, "alarms_enabled", Enum).kind(ARRAY),
        f(36, "activity_tracker_enabled", Enum).kind(BOOL),
        f(39, "clock_time", UInt32).kind(TIME),
        f(40, "pages_enabled", UInt16).kind(ARRAY),
        f(46, "move_alert_enabled", Enum).kind(BOOL),
        f(47, "date_mode", Enum),
        f(55, "display_orientation", Enum),
        f(56, "mounting_side", Enum),
        f(57, "default_page", UInt16).kind(ARRAY),
        f(58, "autosync_min_steps", UInt16),
        f(59, "autosync_min_time", UInt16),
        f(80, "lactate_threshold_autodetect_enabled", Enum).kind(BOOL),
        f(86, "ble_auto_upload_enabled", Enum).kind(BOOL),
        f(89, "auto_sync_frequency", Enum),
        f(90, "auto_activity_detect", UInt32),
        f(92, "alarms_repeat", UInt32Z).kind(ARRAY),
        f(94, "number_of_screens", UInt8),
        f(95, "smart_notification_display_orientation", Enum),
        f(134, "tap_interface", Enum),
        f(174, "tap_sensitivity", Enum),
    ]),
    message!(3, "user_profile", [
        f(0, "friendly_name", String).sized(16),
        f(1, "gender", Enum).kind(e(&GENDER)),
        f(2, "age", UInt8),
        f(3, "height", UInt8).scaled(100.0, 0.0),
        f(4, "weight", UInt16).scaled(10.0, 0.0),
        f(5, "language", Enum).kind(e(&LANGUAGE)),
        f(6, "elev_setting", Enum).kind(e(&DISPLAY_MEASURE)),
        f(7, "weight_setting", Enum).kind(e(&DISPLAY_MEASURE)),
        f(8, "resting_heart_rate", UInt8),
        f(9, "default_max_running_heart_rate", UInt8),
        f(10, "default_max_biking_heart_rate", UInt8),
        f(11, "default_max_heart_rate", UInt8),
        f(12, "hr_setting", Enum),
        f(13, "speed_setting", Enum).kind(e(&DISPLAY_MEASURE)),
        f(14, "dist_setting", Enum).kind(e(&DISPLAY_MEASURE)),
        f(16, "power_setting", Enum),
        f(17, "activity_class", Enum),
        f(18, "position_setting", Enum),
        f(21, "temperature_setting", Enum).kind(e(&DISPLAY_MEASURE)),
        f(22, "local_id", UInt16),
        f(23, "global_id", Byte).sized(6).kind(ARRAY),
        f(24, "year_of_birth", UInt8).scaled(1.0, -1900.0),
        f(28, "wake_time", UInt32),
        f(29, "sleep_time", UInt32),
        f(30, "height_setting", Enum).kind(e(&DISPLAY_MEASURE)),
        f(31, "user_running_step_length", UInt16),
        f(32, "user_walking_step_length", UInt16),
        f(37, "ltspeed", UInt16).scaled(10.0, 0.0),
        f(41, "time_last_lthr_update", UInt32),
        f(47, "depth_setting", Enum).kind(e(&DISPLAY_MEASURE)),
        f(49, "dive_count", UInt32),
        f(62, "gender_x", Enum),
        f(254, "message_index", UInt16),
    ]),
    message!(4, "hrm_profile", [
        f(0, "enabled", Enum).kind(BOOL),
        f(1, "hrm_ant_id", UInt16Z),
        f(2, "log_hrv", Enum).kind(BOOL),
        f(3, "hrm_ant_id_trans_type", UInt8Z),
        f(254, "message_index", UInt16),
    ]),
    message!(5, "sdm_profile", [
        f(0, "enabled", Enum).kind(BOOL),
        f(1, "sdm_ant_id", UInt16Z),
        f(2, "sdm_cal_factor", UInt16).scaled(10.0, 0.0),
        f(3, "odometer", UInt32).scaled(100.0, 0.0),
        f(4, "speed_source", Enum),
        f(5, "sdm_ant_id_trans_type", UInt8Z),
        f(7, "odometer_rollover", UInt8),
        f(254, "message_index", UInt16),
    ]),
    message!(6, "bike_profile", [
        f(0, "name", String),
        f(1, "sport", Enum).kind(e(&SPORT)),
        f(2, "sub_sport", Enum).kind(e(&SUB_SPORT)),
        f(3, "odometer", UInt32).scaled(100.0, 0.0),
        f(4, "bike_spd_ant_id", UInt16Z),
        f(5, "bike_cad_ant_id", UInt16Z),
        f(6, "bike_spdcad_ant_id", UInt16Z),
        f(7, "bike_power_ant_id", UInt16Z),
        f(8, "custom_wheelsize", UInt16).scaled(1000.0, 0.0),
        f(9, "auto_wheelsize", UInt16).scaled(1000.0, 0.0),
        f(10, "bike_weight", UInt16).scaled(10.0, 0.0),
        f(11, "power_cal_factor", UInt16).scaled(10.0, 0.0),
        f(12, "auto_wheel_cal", Enum).kind(BOOL),
        f(13, "auto_power_zero", Enum).kind(BOOL),
        f(14, "id", UInt8),
        f(15, "spd_enabled", Enum).kind(BOOL),
        f(16, "cad_enabled", Enum).kind(BOOL),
        f(17, "spdcad_enabled", Enum).kind(BOOL),
        f(18, "power_enabled", Enum).kind(BOOL),
        f(19, "crank_length", UInt8).scaled(2.0, -100.0),
        f(20, "enabled", Enum).kind(BOOL),
        f(21, "bike_spd_ant_id_trans_type", UInt8Z),
        f(22, "bike_cad_ant_id_trans_type", UInt8Z),
        f(23, "bike_spdcad_ant_id_trans_type", UInt8Z),
        f(24, "bike_power_ant_id_trans_type", UInt8Z),
        f(37, "odometer_rollover", UInt8),
        f(38, "front_gear_num", UInt8Z),
        f(39, "front_gear", UInt8Z).kind(ARRAY),
        f(40, "rear_gear_num", UInt8Z),
        f(41, "rear_gear", UInt8Z).kind(ARRAY),
        f(44, "shimano_di2_enabled", Enum).kind(BOOL),
        f(254, "message_index", UInt16),
    ]),
    message!(7, "zones_target", [
        f(1, "max_heart_rate", UInt8),
        f(2, "threshold_heart_rate", UInt8),
        f(3, "functional_threshold_power", UInt16),
        f(5, "hr_calc_type", Enum),
        f(7, "pwr_calc_type", Enum),
    ]),
    message!(8, "hr_zone", [
        f(1, "high_bpm", UInt8),
        f(2, "name", String).sized(16),
        f(254, "message_index", UInt16),
    ]),
    message!(9, "power_zone", [
        f(1, "high_value", UInt16),
        f(2, "name", String),
        f(254, "message_index", UInt16),
    ]),
    message!(10, "met_zone", [
        f(1, "high_bpm", UInt8),
        f(2, "calories", UInt16).scaled(10.0, 0.0),
        f(3, "fat_calories", UInt8).scaled(10.0, 0.0),
        f(254, "message_index", UInt16),
    ]),
    message!(12, "sport", [
        f(0, "sport", Enum).kind(e(&SPORT)),
        f(1, "sub_sport", Enum).kind(e(&SUB_SPORT)),
        f(3, "name", String).sized(16),
    ]),
    message!(13, "training_settings", [
        f(31, "target_distance", UInt32).scaled(100.0, 0.0),
        f(32, "target_speed", UInt16).scaled(1000.0, 0.0),
        f(33, "target_time", UInt32),
        f(153, "precise_target_speed", UInt32).scaled(1000000.0, 0.0),
    ]),
    message!(15, "goals", [
        f(0, "sport", Enum).kind(e(&SPORT)),
        f(1, "sub_sport", Enum).kind(e(&SUB_SPORT)),
        f(2, "start_date", UInt32),
        f(3, "end_date", UInt32),
        f(4, "type", Enum).kind(e(&GOAL_TYPE)),
        f(5, "value", UInt32),
        f(6, "repeat", Enum),
        f(7, "target_value", UInt32),
        f(8, "recurrence", Enum),
        f(9, "recurrence_value", UInt16),
        f(10, "enabled", Enum).kind(BOOL),
        f(11, "source", Enum).kind(e(&GOAL_SOURCE)),
        f(254, "message_index", UInt16),
    ]),
    message!(18, "session", [
        f(0, "event", Enum).kind(e(&EVENT)),
        f(1, "event_type", Enum).kind(e(&EVENT_TYPE)),
        f(2, "start_time", UInt32).kind(TIME),
        f(3, "start_position_lat", SInt32).kind(COORD),
        f(4, "start_position_long", SInt32).kind(COORD),
        f(5, "sport", Enum).kind(e(&SPORT)),
        f(6, "sub_sport", Enum).kind(e(&SUB_SPORT)),
        f(7, "total_elapsed_time", UInt32).scaled(1000.0, 0.0),
        f(8, "total_timer_time", UInt32).scaled(1000.0, 0.0),
        f(9, "total_distance", UInt32).scaled(100.0, 0.0),
        f(10, "total_cycles", UInt32),
        f(11, "total_calories", UInt16),
        f(13, "total_fat_calories", UInt16),
        f(14, "avg_speed", UInt16).scaled(1000.0, 0.0),
        f(15, "max_speed", UInt16).scaled(1000.0, 0.0),
        f(16, "avg_heart_rate", UInt8),
        f(17, "max_heart_rate", UInt8),
        f(18, "avg_cadence", UInt8),
        f(19, "max_cadence", UInt8),
        f(20, "avg_power", UInt16),
        f(21, "max_power", UInt16),
        f(22, "total_ascent", UInt16),
        f(23, "total_descent", UInt16),
        f(24, "total_training_effect", UInt8).scaled(10.0, 0.0),
        f(25, "first_lap_index", UInt16),
        f(26, "num_laps", UInt16),
        f(27, "event_group", UInt8),
        f(28, "trigger", Enum),
        f(29, "nec_latitude", SInt32).kind(COORD),
        f(30, "nec_longitude", SInt32).kind(COORD),
        f(31, "swc_latitude", SInt32).kind(COORD),
        f(32, "swc_longitude", SInt32).kind(COORD),
        f(33, "num_lengths", UInt16),
        f(34, "normalized_power", UInt16),
        f(35, "training_stress_score", UInt16).scaled(10.0, 0.0),
        f(36, "intensity_factor", UInt16).scaled(1000.0, 0.0),
        f(37, "left_right_balance", UInt16),
        f(38, "end_latitude", SInt32).kind(COORD),
        f(39, "end_longitude", SInt32).kind(COORD),
        f(41, "avg_stroke_count", UInt32),
        f(42, "avg_stroke_distance", UInt16).scaled(100.0, 0.0),
        f(43, "swim_stroke", Enum).kind(e(&SWIM_STROKE)),
        f(44, "pool_length", UInt16).scaled(100.0, 0.0),
        f(45, "threshold_power", UInt16),
        f(46, "pool_length_unit", Enum),
        f(47, "num_active_lengths", UInt16),
        f(48, "total_work", UInt32),
        f(49, "avg_altitude", UInt16).scaled(5.0, 500.0),
        f(50, "max_altitude", UInt16).scaled(5.0, 500.0),
        f(51, "gps_accuracy", UInt8),
        f(52, "avg_grade", SInt16).scaled(100.0, 0.0),
        f(53, "avg_pos_grade", SInt16).scaled(100.0, 0.0),
        f(54, "avg_neg_grade", SInt16).scaled(100.0, 0.0),
        f(55, "max_pos_grade", SInt16).scaled(100.0, 0.0),
        f(56, "max_neg_grade", SInt16).scaled(100.0, 0.0),
        f(57, "avg_temperature", SInt8),
        f(58, "max_temperature", SInt8),
        f(59, "total_moving_time", UInt32).scaled(1000.0, 0.0),
        f(60, "avg_pos_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(61, "avg_neg_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(62, "max_pos_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(63, "max_neg_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(64, "min_heart_rate", UInt8),
        f(65, "time_in_hr_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(66, "time_in_speed_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(67, "time_in_cadence_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(68, "time_in_power_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(69, "avg_lap_time", UInt32).scaled(1000.0, 0.0),
        f(70, "best_lap_index", UInt16),
        f(71, "min_altitude", UInt16).scaled(5.0, 500.0),
        f(79, "avg_swim_cadence", UInt16).scaled(10.0, 0.0),
        f(80, "avg_swolf", UInt16),
        f(82, "player_score", UInt16),
        f(83, "opponent_score", UInt16),
        f(84, "opponent_name", String),
        f(85, "stroke_count", UInt16).kind(ARRAY),
        f(86, "zone_count", UInt16).kind(ARRAY),
        f(87, "max_ball_speed", UInt16).scaled(100.0, 0.0),
        f(88, "avg_ball_speed", UInt16).scaled(100.0, 0.0),
        f(89, "avg_vertical_oscillation", UInt16).scaled(10.0, 0.0),
        f(90, "avg_stance_time_percent", UInt16).scaled(100.0, 0.0),
        f(91, "avg_stance_time", UInt16).scaled(10.0, 0.0),
        f(92, "avg_fractional_cadence", UInt8).scaled(128.0, 0.0),
        f(93, "max_fractional_cadence", UInt8).scaled(128.0, 0.0),
        f(94, "total_fractional_cycles", UInt8).scaled(128.0, 0.0),
        f(95, "avg_total_hemoglobin_conc", UInt16).scaled(100.0, 0.0).kind(ARRAY),
        f(96, "min_total_hemoglobin_conc", UInt16).scaled(100.0, 0.0).kind(ARRAY),
        f(97, "max_total_hemoglobin_conc", UInt16).scaled(100.0, 0.0).kind(ARRAY),
        f(98, "avg_saturated_hemoglobin_percent", UInt16).scaled(10.0, 0.0).kind(ARRAY),
        f(99, "min_saturated_hemoglobin_percent", UInt16).scaled(10.0, 0.0).kind(ARRAY),
        f(100, "max_saturated_hemoglobin_percent", UInt16).scaled(10.0, 0.0).kind(ARRAY),
        f(101, "avg_left_torque_effectiveness", UInt8).scaled(2.0, 0.0),
        f(102, "avg_right_torque_effectiveness", UInt8).scaled(2.0, 0.0),
        f(103, "avg_left_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(104, "avg_right_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(105, "avg_combined_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(107, "front_shifts", UInt16),
        f(108, "rear_shifts", UInt16),
        f(110, "sport_profile_name", String).sized(64),
        f(111, "sport_index", UInt8),
        f(112, "stand_time", UInt32),
        f(113, "stand_count", UInt16),
        f(114, "avg_left_pco", SInt8),
        f(115, "avg_right_pco", SInt8),
        f(116, "avg_left_power_phase", UInt8).kind(ARRAY),
        f(117, "avg_left_power_phase_peak", UInt8).kind(ARRAY),
        f(118, "avg_right_power_phase", UInt8).kind(ARRAY),
        f(119, "avg_right_power_phase_peak", UInt8).kind(ARRAY),
        f(120, "avg_power_position", UInt16).kind(ARRAY),
        f(121, "max_power_position", UInt16).kind(ARRAY),
        f(122, "avg_cadence_position", UInt8).kind(ARRAY),
        f(123, "max_cadence_position", UInt8).kind(ARRAY),
        f(124, "enhanced_avg_speed", UInt32).scaled(1000.0, 0.0),
        f(125, "enhanced_max_speed", UInt32).scaled(1000.0, 0.0),
        f(126, "enhanced_avg_altitude", UInt32).scaled(5.0, 500.0),
        f(127, "enhanced_min_altitude", UInt32).scaled(5.0, 500.0),
        f(128, "enhanced_max_altitude", UInt32).scaled(5.0, 500.0),
        f(129, "avg_lev_motor_power", UInt16),
        f(130, "max_lev_motor_power", UInt16),
        f(131, "lev_battery_consumption", UInt8).scaled(2.0, 0.0),
        f(132, "avg_vertical_ratio", UInt16).scaled(100.0, 0.0),
        f(133, "avg_stance_time_balance", UInt16).scaled(100.0, 0.0),
        f(134, "avg_step_length", UInt16).scaled(10.0, 0.0),
        f(137, "total_anaerobic_training_effect", UInt8).scaled(10.0, 0.0),
        f(139, "avg_vam", UInt16).scaled(1000.0, 0.0),
        f(140, "avg_depth", UInt32).scaled(1000.0, 0.0),
        f(141, "max_depth", UInt32).scaled(1000.0, 0.0),
        f(142, "surface_interval", UInt32),
        f(143, "start_cns", UInt8),
        f(144, "end_cns", UInt8),
        f(145, "start_n2", UInt16),
        f(146, "end_n2", UInt16),
        f(147, "avg_respiration_rate", UInt8),
        f(148, "max_respiration_rate", UInt8),
        f(149, "min_respiration_rate", UInt8),
        f(150, "min_temperature", SInt8),
        f(155, "o2_toxicity", UInt16),
        f(156, "dive_number", UInt32),
        f(168, "training_load_peak", SInt32).scaled(65536.0, 0.0),
        f(169, "enhanced_avg_respiration_rate", UInt16).scaled(100.0, 0.0),
        f(170, "enhanced_max_respiration_rate", UInt16).scaled(100.0, 0.0),
        f(178, "estimated_sweat_loss", UInt16),
        f(180, "enhanced_min_respiration_rate", UInt16).scaled(100.0, 0.0),
        f(181, "total_grit", Float32),
        f(182, "total_flow", Float32),
        f(183, "jump_count", UInt16),
        f(186, "avg_grit", Float32),
        f(187, "avg_flow", Float32),
        f(188, "primary_benefit", Enum),
        f(192, "workout_feel", UInt8),
        f(193, "workout_rpe", UInt8),
        f(194, "avg_spo2", UInt8),
        f(195, "avg_stress", UInt8),
        f(196, "resting_calories", UInt16),
        f(197, "hrv_sdrr", UInt8),
        f(198, "hrv_rmssd", UInt8),
        f(199, "total_fractional_ascent", UInt8).scaled(100.0, 0.0),
        f(200, "total_fractional_descent", UInt8).scaled(100.0, 0.0),
        f(205, "beginning_potential", UInt8),
        f(206, "ending_potential", UInt8),
        f(207, "min_stamina", UInt8),
        f(208, "avg_core_temperature", UInt16).scaled(100.0, 0.0),
        f(209, "min_core_temperature", UInt16).scaled(100.0, 0.0),
        f(210, "max_core_temperature", UInt16).scaled(100.0, 0.0),
        f(222, "step_speed_loss", UInt16).scaled(100.0, 0.0),
        f(223, "step_speed_loss_percentage", UInt16).scaled(100.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
        f(254, "message_index", UInt16),
    ]),
    message!(19, "lap", [
        f(0, "event", Enum).kind(e(&EVENT)),
        f(1, "event_type", Enum).kind(e(&EVENT_TYPE)),
        f(2, "start_time", UInt32).kind(TIME),
        f(3, "start_position_lat", SInt32).kind(COORD),
        f(4, "start_position_long", SInt32).kind(COORD),
        f(5, "end_position_lat", SInt32).kind(COORD),
        f(6, "end_position_long", SInt32).kind(COORD),
        f(7, "total_elapsed_time", UInt32).scaled(1000.0, 0.0),
        f(8, "total_timer_time", UInt32).scaled(1000.0, 0.0),
        f(9, "total_distance", UInt32).scaled(100.0, 0.0),
        f(10, "total_cycles", UInt32),
        f(11, "total_calories", UInt16),
        f(12, "total_fat_calories", UInt16),
        f(13, "avg_speed", UInt16).scaled(1000.0, 0.0),
        f(14, "max_speed", UInt16).scaled(1000.0, 0.0),
        f(15, "avg_heart_rate", UInt8),
        f(16, "max_heart_rate", UInt8),
        f(17, "avg_cadence", UInt8),
        f(18, "max_cadence", UInt8),
        f(19, "avg_power", UInt16),
        f(20, "max_power", UInt16),
        f(21, "total_ascent", UInt16),
        f(22, "total_descent", UInt16),
        f(23, "intensity", Enum).kind(e(&INTENSITY)),
        f(24, "lap_trigger", Enum).kind(e(&LAP_TRIGGER)),
        f(25, "sport", Enum).kind(e(&SPORT)),
        f(26, "event_group", UInt8),
        f(32, "num_lengths", UInt16),
        f(33, "normalized_power", UInt16),
        f(34, "left_right_balance", UInt16),
        f(35, "first_length_index", UInt16),
        f(37, "avg_stroke_distance", UInt16),
        f(38, "swim_style", Enum).kind(e(&SWIM_STROKE)),
        f(39, "sub_sport", Enum).kind(e(&SUB_SPORT)),
        f(40, "num_active_lengths", UInt16),
        f(41, "total_work", UInt32),
        f(42, "avg_altitude", UInt16).scaled(5.0, 500.0),
        f(43, "max_altitude", UInt16).scaled(5.0, 500.0),
        f(44, "gps_accuracy", UInt8),
        f(45, "avg_grade", SInt16).scaled(100.0, 0.0),
        f(46, "avg_pos_grade", SInt16).scaled(100.0, 0.0),
        f(47, "avg_neg_grade", SInt16).scaled(100.0, 0.0),
        f(48, "max_pos_grade", SInt16).scaled(100.0, 0.0),
        f(49, "max_neg_grade", SInt16).scaled(100.0, 0.0),
        f(50, "avg_temperature", SInt8),
        f(51, "max_temperature", SInt8),
        f(52, "total_moving_time", UInt32).scaled(1000.0, 0.0),
        f(53, "avg_pos_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(54, "avg_neg_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(55, "max_pos_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(56, "max_neg_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(57, "time_in_hr_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(58, "time_in_speed_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(59, "time_in_cadence_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(60, "time_in_power_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(61, "repetition_num", UInt16),
        f(62, "min_altitude", UInt16).scaled(5.0, 500.0),
        f(63, "min_heart_rate", UInt8),
        f(71, "wkt_step_index", UInt16),
        f(73, "avg_swolf", UInt16),
        f(74, "opponent_score", UInt16),
        f(75, "stroke_count", UInt16).kind(ARRAY),
        f(76, "zone_count", UInt16).kind(ARRAY),
        f(77, "avg_vertical_oscillation", UInt16).scaled(10.0, 0.0),
        f(78, "avg_stance_time_percent", UInt16).scaled(100.0, 0.0),
        f(79, "avg_stance_time", UInt16).scaled(10.0, 0.0),
        f(80, "avg_fractional_cadence", UInt8).scaled(128.0, 0.0),
        f(81, "max_fractional_cadence", UInt8).scaled(128.0, 0.0),
        f(82, "total_fractional_cycles", UInt8).scaled(128.0, 0.0),
        f(83, "player_score", UInt16),
        f(84, "avg_total_hemoglobin_conc", UInt16).scaled(100.0, 0.0).kind(ARRAY),
        f(85, "min_total_hemoglobin_conc", UInt16).scaled(100.0, 0.0).kind(ARRAY),
        f(86, "max_total_hemoglobin_conc", UInt16).scaled(100.0, 0.0).kind(ARRAY),
        f(87, "avg_saturated_hemoglobin_percent", UInt16).scaled(10.0, 0.0).kind(ARRAY),
        f(88, "min_saturated_hemoglobin_percent", UInt16).scaled(10.0, 0.0).kind(ARRAY),
        f(89, "max_saturated_hemoglobin_percent", UInt16).scaled(10.0, 0.0).kind(ARRAY),
        f(91, "avg_left_torque_effectiveness", UInt8).scaled(2.0, 0.0),
        f(92, "avg_right_torque_effectiveness", UInt8).scaled(2.0, 0.0),
        f(93, "avg_left_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(94, "avg_right_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(95, "avg_combined_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(98, "time_standing", UInt32).scaled(1000.0, 0.0),
        f(99, "stand_count", UInt16),
        f(100, "avg_left_pco", SInt8),
        f(101, "avg_right_pco", SInt8),
        f(102, "avg_left_power_phase", UInt8).kind(ARRAY),
        f(103, "avg_left_power_phase_peak", UInt8).kind(ARRAY),
        f(104, "avg_right_power_phase", UInt8).kind(ARRAY),
        f(105, "avg_right_power_phase_peak", UInt8).kind(ARRAY),
        f(106, "avg_power_position", UInt16).kind(ARRAY),
        f(107, "max_power_position", UInt16).kind(ARRAY),
        f(108, "avg_cadence_position", UInt8).kind(ARRAY),
        f(109, "max_cadence_position", UInt8).kind(ARRAY),
        f(110, "enhanced_avg_speed", UInt32).scaled(100.0, 0.0),
        f(111, "enhanced_max_speed", UInt32).scaled(100.0, 0.0),
        f(112, "enhanced_avg_altitude", UInt32).scaled(5.0, 500.0),
        f(113, "enhanced_min_altitude", UInt32).scaled(5.0, 500.0),
        f(114, "enhanced_max_altitude", UInt32).scaled(5.0, 500.0),
        f(115, "avg_lev_motor_power", UInt16),
        f(116, "max_lev_motor_power", UInt16),
        f(117, "lev_battery_consumption", UInt8).scaled(2.0, 0.0),
        f(118, "avg_vertical_ratio", UInt16).scaled(100.0, 0.0),
        f(119, "avg_stance_time_balance", UInt16).scaled(100.0, 0.0),
        f(120, "avg_step_length", UInt16).scaled(10.0, 0.0),
        f(121, "avg_vam", UInt16).scaled(1000.0, 0.0),
        f(122, "avg_depth", UInt32).scaled(1000.0, 0.0),
        f(123, "max_depth", UInt32).scaled(1000.0, 0.0),
        f(124, "min_temperature", SInt8),
        f(136, "enhanced_avg_respiration_rate", UInt16).scaled(100.0, 0.0),
        f(137, "enhanced_max_respiration_rate", UInt16).scaled(100.0, 0.0),
        f(147, "avg_respiration_rate", UInt8),
        f(148, "max_respiration_rate", UInt8),
        f(149, "total_grit", Float32),
        f(150, "total_flow", Float32),
        f(151, "jump_count", UInt16),
        f(153, "avg_grit", Float32),
        f(154, "avg_flow", Float32),
        f(156, "total_fractional_ascent", UInt8).scaled(100.0, 0.0),
        f(157, "total_fractional_descent", UInt8).scaled(100.0, 0.0),
        f(158, "avg_core_temperature", UInt16).scaled(100.0, 0.0),
        f(159, "min_core_temperature", UInt16).scaled(100.0, 0.0),
        f(160, "max_core_temperature", UInt16).scaled(100.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
        f(254, "message_index", UInt16),
    ]),
    message!(20, "record", [
        f(0, "position_lat", SInt32).kind(COORD),
        f(1, "position_long", SInt32).kind(COORD),
        f(2, "altitude", UInt16).scaled(5.0, 500.0),
        f(3, "heart_rate", UInt8),
        f(4, "cadence", UInt8),
        f(5, "distance", UInt32).scaled(100.0, 0.0),
        f(6, "speed", UInt16).scaled(1000.0, 0.0),
        f(7, "power", UInt16),
        f(8, "compressed_speed_distance", Byte).sized(3).kind(ARRAY),
        f(9, "grade", SInt16).scaled(100.0, 0.0),
        f(10, "resistance", UInt8),
        f(11, "time_from_course", SInt32).scaled(1000.0, 0.0),
        f(12, "cycle_length", UInt8).scaled(100.0, 0.0),
        f(13, "temperature", SInt8),
        f(17, "speed_1s", UInt8).scaled(16.0, 0.0).kind(ARRAY),
        f(18, "cycles", UInt8),
        f(19, "total_cycles", UInt32),
        f(28, "compressed_accumulated_power", UInt16),
        f(29, "accumulated_power", UInt32),
        f(30, "left_right_balance", UInt8),
        f(31, "gps_accuracy", UInt8),
        f(32, "vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(33, "calories", UInt16),
        f(39, "oscillation", UInt16).scaled(10.0, 0.0),
        f(40, "stance_time_percent", UInt16).scaled(100.0, 0.0),
        f(41, "stance_time", UInt16).scaled(10.0, 0.0),
        f(42, "activity", Enum),
        f(43, "left_torque_effectiveness", UInt8).scaled(2.0, 0.0),
        f(44, "right_torque_effectiveness", UInt8).scaled(2.0, 0.0),
        f(45, "left_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(46, "right_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(47, "combined_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(48, "time128", UInt8).scaled(128.0, 0.0),
        f(49, "stroke_type", Enum),
        f(50, "zone", UInt8),
        f(51, "ball_speed", UInt16).scaled(100.0, 0.0),
        f(52, "cadence256", UInt16).scaled(256.0, 0.0),
        f(53, "fractional_cadence", UInt8).scaled(128.0, 0.0),
        f(54, "avg_total_hemoglobin_conc", UInt16).scaled(100.0, 0.0),
        f(55, "min_total_hemoglobin_conc", UInt16).scaled(100.0, 0.0),
        f(56, "max_total_hemoglobin_conc", UInt16).scaled(100.0, 0.0),
        f(57, "avg_saturated_hemoglobin_percent", UInt16).scaled(10.0, 0.0),
        f(58, "min_saturated_hemoglobin_percent", UInt16).scaled(10.0, 0.0),
        f(59, "max_saturated_hemoglobin_percent", UInt16).scaled(10.0, 0.0),
        f(62, "device_index", UInt8),
        f(67, "left_pco", SInt8),
        f(68, "right_pco", SInt8),
        f(69, "left_power_phase", UInt8).kind(ARRAY),
        f(70, "left_power_phase_peak", UInt8).kind(ARRAY),
        f(71, "right_power_phase", UInt8).kind(ARRAY),
        f(72, "right_power_phase_peak", UInt8).kind(ARRAY),
        f(73, "enhanced_speed", UInt32).scaled(1000.0, 0.0),
        f(78, "enhanced_altitude", UInt32).scaled(5.0, 500.0),
        f(81, "battery_soc", UInt8).scaled(2.0, 0.0),
        f(82, "motor_power", UInt16),
        f(83, "vertical_ratio", UInt16).scaled(100.0, 0.0),
        f(84, "stance_time_balance", UInt16).scaled(100.0, 0.0),
        f(85, "step_length", UInt16).scaled(10.0, 0.0),
        f(87, "cycle_length16", UInt16).scaled(100.0, 0.0),
        f(91, "absolute_pressure", UInt32),
        f(92, "depth", UInt32).scaled(1000.0, 0.0),
        f(93, "next_stop_depth", UInt32).scaled(1000.0, 0.0),
        f(94, "next_stop_time", UInt32),
        f(95, "time_to_surface", UInt32),
        f(96, "ndl_time", UInt32),
        f(97, "cns_load", UInt8),
        f(98, "n2_load", UInt16),
        f(99, "respiration_rate", UInt8),
        f(108, "enhanced_respiration_rate", UInt16).scaled(100.0, 0.0),
        f(114, "grit", Float32),
        f(115, "flow", Float32),
        f(116, "current_stress", UInt16).scaled(100.0, 0.0),
        f(117, "ebike_travel_range", UInt16),
        f(118, "ebike_battery_level", UInt8),
        f(119, "ebike_assist_mode", UInt8),
        f(120, "ebike_assist_level_percent", UInt8),
        f(123, "air_time_remaining", UInt32),
        f(124, "pressure_sac", UInt16).scaled(100.0, 0.0),
        f(125, "volume_sac", UInt16).scaled(100.0, 0.0),
        f(126, "rmv", UInt16).scaled(100.0, 0.0),
        f(127, "ascent_rate", SInt32).scaled(1000.0, 0.0),
        f(129, "po2", UInt8).scaled(100.0, 0.0),
        f(136, "wrist_heart_rate", UInt8),
        f(139, "core_temperature", UInt16).scaled(100.0, 0.0),
        f(143, "body_battery", UInt8),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(21, "event", [
        f(0, "event", Enum).kind(e(&EVENT)),
        f(1, "event_type", Enum).kind(e(&EVENT_TYPE)),
        f(2, "data16", UInt16),
        f(3, "data", UInt32),
        f(4, "event_group", UInt8),
        f(7, "score", UInt16),
        f(8, "opponent_score", UInt16),
        f(9, "front_gear_num", UInt8Z),
        f(10, "front_gear", UInt8Z),
        f(11, "rear_gear_num", UInt8Z),
        f(12, "rear_gear", UInt8Z),
        f(13, "device_index", UInt8),
        f(14, "activity_type", Enum),
        f(15, "start_timestamp", UInt32),
        f(21, "radar_threat_level_max", Enum),
        f(22, "radar_threat_count", UInt8),
        f(23, "radar_threat_avg_approach_speed", UInt8).scaled(10.0, 0.0),
        f(24, "radar_threat_max_approach_speed", UInt8).scaled(10.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(22, "device_used", [
        f(0, "speed", UInt8),
        f(1, "distance", UInt8),
        f(2, "cadence", UInt8),
        f(3, "elevation", UInt8),
        f(4, "heart_rate", UInt8),
        f(6, "power", UInt8),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(23, "device_info", [
        f(0, "device_index", UInt8),
        f(1, "device_type", UInt8),
        f(2, "manufacturer", UInt16).kind(e(&MANUFACTURER)),
        f(3, "serial_number", UInt32Z),
        f(4, "product", UInt16),
        f(5, "software_version", UInt16).scaled(100.0, 0.0),
        f(6, "hardware_version", UInt8),
        f(7, "cum_operating_time", UInt32),
        f(10, "battery_voltage", UInt16).scaled(256.0, 0.0),
        f(11, "battery_status", UInt8).kind(e(&BATTERY_STATUS)),
        f(18, "sensor_position", Enum),
        f(19, "descriptor", String).sized(20),
        f(20, "ant_transmission_type", UInt8Z),
        f(21, "ant_device_number", UInt16Z),
        f(22, "ant_network", Enum),
        f(24, "ant_id", UInt32Z),
        f(25, "source_type", Enum),
        f(27, "product_name", String).sized(20),
        f(32, "battery_level", UInt8),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(26, "workout", [
        f(4, "sport", Enum).kind(e(&SPORT)),
        f(5, "capabilities", UInt32Z),
        f(6, "num_valid_steps", UInt16),
        f(8, "wkt_name", String).sized(16),
        f(11, "sub_sport", Enum).kind(e(&SUB_SPORT)),
        f(14, "pool_length", UInt16).scaled(100.0, 0.0),
        f(15, "pool_length_unit", Enum),
        f(17, "notes", String),
        f(254, "message_index", UInt16),
    ]),
    message!(27, "workout_step", [
        f(0, "wkt_step_name", String),
        f(1, "duration_type", Enum),
        f(2, "duration_value", UInt32),
        f(3, "target_type", Enum),
        f(4, "target_value", UInt32),
        f(5, "custom_target_value_low", UInt32),
        f(6, "custom_target_value_high", UInt32),
        f(7, "intensity", Enum).kind(e(&INTENSITY)),
        f(8, "notes", String),
        f(9, "equipment", Enum),
        f(10, "exercise_category", UInt16),
        f(11, "exercise_name", UInt16),
        f(12, "exercise_weight", UInt16).scaled(100.0, 0.0),
        f(13, "weight_display_unit", UInt16),
        f(19, "secondary_target_type", Enum),
        f(20, "secondary_target_value", UInt32),
        f(21, "secondary_custom_target_value_low", UInt32),
        f(22, "secondary_custom_target_value_high", UInt32),
        f(254, "message_index", UInt16),
    ]),
    message!(28, "schedule", [
        f(0, "manufacturer", UInt16).kind(e(&MANUFACTURER)),
        f(1, "product", UInt16),
        f(2, "serial_number", UInt32Z),
        f(3, "time_created", UInt32),
        f(4, "completed", Enum).kind(BOOL),
        f(5, "type", Enum),
        f(6, "scheduled_time", UInt32),
    ]),
    message!(29, "location", [
        f(0, "name", String).sized(32),
        f(1, "position_lat", SInt32).kind(COORD),
        f(2, "position_long", SInt32).kind(COORD),
        f(3, "symbol", UInt16).kind(e(&LOCATION_SYMBOL)),
        f(4, "altitude", UInt16).scaled(5.0, 500.0),
        f(5, "enhanced_altitude", UInt16),
        f(6, "description", String),
        f(253, "timestamp", UInt32).kind(TIME),
        f(254, "message_index", UInt16),
    ]),
    message!(30, "weight_scale", [
        f(0, "weight", UInt16).scaled(100.0, 0.0),
        f(1, "percent_fat", UInt16).scaled(100.0, 0.0),
        f(2, "percent_hydration", UInt16).scaled(100.0, 0.0),
        f(3, "visceral_fat_mass", UInt16).scaled(100.0, 0.0),
        f(4, "bone_mass", UInt16).scaled(100.0, 0.0),
        f(5, "muscle_mass", UInt16).scaled(100.0, 0.0),
        f(7, "basal_met", UInt16).scaled(4.0, 0.0),
        f(8, "physique_rating", UInt8),
        f(9, "active_met", UInt16).scaled(4.0, 0.0),
        f(10, "metabolic_age", UInt8),
        f(11, "visceral_fat_rating", UInt8),
        f(12, "user_profile_index", UInt16),
        f(13, "bmi", UInt16).scaled(10.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(31, "course", [
        f(4, "sport", Enum).kind(e(&SPORT)),
        f(5, "name", String).sized(16),
        f(6, "capabilities", UInt32Z),
        f(7, "sub_sport", Enum).kind(e(&SUB_SPORT)),
    ]),
    message!(32, "course_point", [
        f(1, "timestamp", UInt32).kind(TIME),
        f(2, "position_lat", SInt32).kind(COORD),
        f(3, "position_long", SInt32).kind(COORD),
        f(4, "distance", UInt32).scaled(100.0, 0.0),
        f(5, "type", Enum).kind(e(&COURSE_POINT)),
        f(6, "name", String).sized(16),
        f(8, "favorite", Enum),
        f(254, "message_index", UInt16),
    ]),
    message!(33, "totals", [
        f(0, "timer_time", UInt32),
        f(1, "distance", UInt32),
        f(2, "calories", UInt32),
        f(3, "sport", Enum).kind(e(&SPORT)),
        f(4, "elapsed_time", UInt32),
        f(5, "sessions", UInt16),
        f(6, "active_time", UInt32),
        f(9, "sport_index", UInt8),
        f(10, "activity_profile", String),
        f(253, "timestamp", UInt32).kind(TIME),
        f(254, "message_index", UInt16),
    ]),
    message!(34, "activity", [
        f(0, "total_timer_time", UInt32).scaled(1000.0, 0.0),
        f(1, "num_sessions", UInt16),
        f(2, "type", Enum).kind(e(&ACTIVITY)),
        f(3, "event", Enum).kind(e(&EVENT)),
        f(4, "event_type", Enum).kind(e(&EVENT_TYPE)),
        f(5, "local_timestamp", UInt32),
        f(6, "event_group", UInt8),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(35, "software", [
        f(3, "version", UInt16).scaled(100.0, 0.0),
        f(5, "part_number", String).sized(16),
        f(254, "message_index", UInt16),
    ]),
    message!(37, "file_capabilities", [
        f(0, "type", Enum),
        f(1, "flags", UInt8Z),
        f(2, "directory", String).sized(16),
        f(3, "max_count", UInt16),
        f(4, "max_size", UInt32),
        f(254, "message_index", UInt16),
    ]),
    message!(38, "mesg_capabilities", [
        f(0, "file", Enum),
        f(1, "mesg_num", UInt16),
        f(2, "count_type", Enum),
        f(3, "max_count", UInt16),
        f(4, "count", UInt16),
        f(254, "message_index", UInt16),
    ]),
    message!(39, "field_capabilities", [
        f(0, "file", Enum),
        f(1, "mesg_num", UInt16),
        f(2, "field_num", UInt8),
        f(3, "count", UInt16),
        f(254, "message_index", UInt16),
    ]),
    message!(49, "file_creator", [
        f(0, "software_version", UInt16),
        f(1, "hardware_version", UInt8),
    ]),
    message!(51, "blood_pressure", [
        f(0, "systolic_pressure", UInt16),
        f(1, "diastolic_pressure", UInt16),
        f(2, "mean_arterial_pressure", UInt16),
        f(3, "map_3_sample_mean", UInt16),
        f(4, "map_morning_values", UInt16),
        f(5, "map_evening_values", UInt16),
        f(6, "heart_rate", UInt8),
        f(7, "heart_rate_type", Enum),
        f(8, "status", Enum),
        f(9, "user_profile_index", UInt16),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(53, "speed_zone", [
        f(0, "high_value", UInt16).scaled(1000.0, 0.0),
        f(1, "name", String),
        f(254, "message_index", UInt16),
    ]),
    message!(55, "monitoring", [
        f(0, "device_index", UInt8),
        f(1, "calories", UInt16),
        f(2, "distance", UInt32).scaled(100.0, 0.0),
        f(3, "cycles", UInt32).scaled(2.0, 0.0),
        f(4, "active_time", UInt32).scaled(1000.0, 0.0),
        f(5, "activity_type", Enum).kind(e(&SPORT)),
        f(6, "activity_subtype", Enum),
        f(7, "activity_level", Enum),
        f(8, "distance_16", UInt16),
        f(9, "cycles_16", UInt16),
        f(10, "active_time_16", UInt16),
        f(11, "local_timestamp", UInt32),
        f(12, "temperature", SInt16).scaled(100.0, 0.0),
        f(14, "temperature_min", SInt16).scaled(100.0, 0.0),
        f(15, "temperature_max", SInt16).scaled(100.0, 0.0),
        f(16, "activity_time", UInt16).sized(8).kind(ARRAY),
        f(19, "active_calories", UInt16),
        f(24, "current_activity_type_intensity", Byte),
        f(25, "timestamp_min_8", UInt8),
        f(26, "timestamp_16", UInt16),
        f(27, "heart_rate", UInt8),
        f(28, "intensity", UInt8).scaled(10.0, 0.0),
        f(29, "duration_min", UInt16),
        f(30, "duration", UInt32),
        f(31, "ascent", UInt32).scaled(1000.0, 0.0),
        f(32, "descent", UInt32).scaled(1000.0, 0.0),
        f(33, "moderate_activity_minutes", UInt16),
        f(34, "vigorous_activity_minutes", UInt16),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(70, "map_layer", [
        f(2, "relief_shading", Enum),
        f(11, "orientation", Enum),
        f(13, "user_locations", Enum),
        f(14, "auto_zoom", Enum),
        f(15, "guide_text", Enum),
        f(16, "track_log", Enum),
        f(20, "courses", Enum),
        f(23, "spot_soundings", Enum),
        f(24, "light_sectors", Enum),
        f(27, "segments", Enum),
        f(28, "contours", Enum),
        f(31, "popularity", Enum),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(72, "training_file", [
        f(0, "type", Enum),
        f(1, "manufacturer", UInt16).kind(e(&MANUFACTURER)),
        f(2, "product", UInt16),
        f(3, "serial_number", UInt32Z),
        f(4, "time_created", UInt32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(78, "hrv", [
        f(0, "time", UInt16).sized(10).scaled(1000.0, 0.0).kind(ARRAY),
    ]),
    message!(79, "user_metrics", [
        f(0, "vo2_max", UInt16),
        f(1, "age", UInt8),
        f(2, "height", UInt8).scaled(100.0, 0.0),
        f(3, "weight", UInt16).scaled(10.0, 0.0),
        f(4, "gender", Enum).kind(e(&GENDER)),
        f(6, "max_hr", UInt8),
        f(8, "remaining_recovery_time", UInt16),
        f(15, "initial_body_battery", UInt8),
        f(16, "start_of_activity", UInt32),
        f(32, "beginning_potential", UInt8),
        f(35, "end_of_previous_activity", UInt32),
        f(39, "wake_up_time", UInt32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(80, "ant_rx", [
        f(0, "fractional_timestamp", UInt16).scaled(32768.0, 0.0),
        f(1, "mesg_id", Byte),
        f(2, "mesg_data", Byte).kind(ARRAY),
        f(3, "channel_number", UInt8),
        f(4, "data", Byte).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(81, "ant_tx", [
        f(0, "fractional_timestamp", UInt16).scaled(32768.0, 0.0),
        f(1, "mesg_id", Byte),
        f(2, "mesg_data", Byte).kind(ARRAY),
        f(3, "channel_number", UInt8),
        f(4, "data", Byte).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(82, "ant_channel_id", [
        f(0, "channel_number", UInt8),
        f(1, "device_type", UInt8Z),
        f(2, "device_number", UInt16Z),
        f(3, "transmission_type", UInt8Z),
        f(4, "device_index", UInt8),
    ]),
    message!(101, "length", [
        f(0, "event", Enum).kind(e(&EVENT)),
        f(1, "event_type", Enum).kind(e(&EVENT_TYPE)),
        f(2, "start_time", UInt32),
        f(3, "total_elapsed_time", UInt32).scaled(1000.0, 0.0),
        f(4, "total_timer_time", UInt32).scaled(1000.0, 0.0),
        f(5, "total_strokes", UInt16),
        f(6, "avg_speed", UInt16).scaled(1000.0, 0.0),
        f(7, "swim_stroke", Enum).kind(e(&SWIM_STROKE)),
        f(9, "avg_swimming_cadence", UInt8),
        f(10, "event_group", UInt8),
        f(11, "total_calories", UInt16),
        f(12, "length_type", Enum),
        f(18, "player_score", UInt16),
        f(19, "opponent_score", UInt16),
        f(20, "stroke_count", UInt16).kind(ARRAY),
        f(21, "zone_count", UInt16).kind(ARRAY),
        f(22, "enhanced_avg_respiration_rate", UInt16).scaled(1000.0, 0.0),
        f(23, "enhanced_max_respiration_rate", UInt16).scaled(1000.0, 0.0),
        f(24, "avg_respiration_rate", UInt8),
        f(25, "max_respiration_rate", UInt8),
        f(253, "timestamp", UInt32).kind(TIME),
        f(254, "message_index", UInt16),
    ]),
    message!(103, "monitoring_info", [
        f(0, "local_timestamp", UInt32),
        f(1, "activity_type", Enum).kind(ARRAY),
        f(3, "steps_to_distance", UInt16).scaled(5000.0, 0.0).kind(ARRAY),
        f(4, "steps_to_calories", UInt16).scaled(5000.0, 0.0).kind(ARRAY),
        f(5, "resting_metabolic_rate", UInt16),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(104, "device_status", [
        f(0, "battery_voltage", UInt16).scaled(1000.0, 0.0),
        f(2, "battery_level", UInt8),
        f(3, "temperature", SInt8),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(105, "pad", []),
    message!(106, "slave_device", [
        f(0, "manufacturer", UInt16).kind(e(&MANUFACTURER)),
        f(1, "product", UInt16),
    ]),
    message!(127, "connectivity", [
        f(0, "bluetooth_enabled", Enum).kind(BOOL),
        f(1, "bluetooth_le_enabled", Enum).kind(BOOL),
        f(2, "ant_enabled", Enum).kind(BOOL),
        f(3, "name", String).sized(20),
        f(4, "live_tracking_enabled", Enum).kind(BOOL),
        f(5, "weather_conditions_enabled", Enum).kind(BOOL),
        f(6, "weather_alerts_enabled", Enum).kind(BOOL),
        f(7, "auto_activity_upload_enabled", Enum).kind(BOOL),
        f(8, "course_download_enabled", Enum).kind(BOOL),
        f(9, "workout_download_enabled", Enum).kind(BOOL),
        f(10, "gps_ephemeris_download_enabled", Enum).kind(BOOL),
        f(11, "incident_detection_enabled", Enum).kind(BOOL),
        f(12, "grouptrack_enabled", Enum).kind(BOOL),
    ]),
    message!(128, "weather_conditions", [
        f(0, "weather_report", Enum).kind(e(&WEATHER_REPORT)),
        f(1, "temperature", SInt8),
        f(2, "condition", Enum).kind(e(&WEATHER_CONDITION)),
        f(3, "wind_direction", UInt16),
        f(4, "wind_speed", UInt16).scaled(1000.0, 0.0),
        f(5, "precipitation_probability", UInt8),
        f(6, "temperature_feels_like", SInt8),
        f(7, "relative_humidity", UInt8),
        f(8, "location", String).sized(64),
        f(9, "observed_at_time", UInt32).kind(TIME),
        f(10, "observed_location_lat", SInt32).kind(COORD),
        f(11, "observed_location_long", SInt32).kind(COORD),
        f(12, "day_of_week", Enum).kind(e(&DAY_OF_WEEK)),
        f(13, "high_temperature", SInt8),
        f(14, "low_temperature", SInt8),
        f(15, "dew_point", SInt8),
        f(16, "uv_index", Float32),
        f(17, "air_quality", Enum).kind(e(&AIR_QUALITY)),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(129, "weather_alert", [
        f(0, "report_id", String),
        f(1, "issue_time", UInt32),
        f(2, "expire_time", UInt32),
        f(3, "severity", Enum),
        f(4, "type", Enum),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(131, "cadence_zone", [
        f(0, "high_value", UInt8),
        f(1, "name", String),
        f(254, "message_index", UInt16),
    ]),
    message!(132, "hr", [
        f(0, "fractional_timestamp", UInt16).scaled(32768.0, 0.0),
        f(1, "time256", UInt8).scaled(256.0, 0.0),
        f(6, "filtered_bpm", UInt8).sized(8).kind(ARRAY),
        f(9, "event_timestamp", UInt32).sized(32).scaled(1024.0, 0.0).kind(ARRAY),
        f(10, "event_timestamp_12", Byte).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(140, "physiological_metrics", [
        f(4, "aerobic_effect", UInt8).scaled(10.0, 0.0),
        f(7, "met_max", SInt32).scaled(65536.0, 0.0),
        f(9, "recovery_time", UInt16),
        f(14, "lactate_threshold_heart_rate", UInt16),
        f(20, "anaerobic_effect", UInt8).scaled(10.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(141, "epo_status", [
        f(0, "status", Enum),
        f(1, "start_time", UInt32),
        f(2, "end_time", UInt32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(142, "segment_lap", [
        f(0, "event", Enum).kind(e(&EVENT)),
        f(1, "event_type", Enum).kind(e(&EVENT_TYPE)),
        f(2, "start_time", UInt32),
        f(3, "start_position_lat", SInt32).kind(COORD),
        f(4, "start_position_long", SInt32).kind(COORD),
        f(5, "end_position_lat", SInt32).kind(COORD),
        f(6, "end_position_long", SInt32).kind(COORD),
        f(7, "total_elapsed_time", UInt32).scaled(1000.0, 0.0),
        f(8, "total_timer_time", UInt32).scaled(1000.0, 0.0),
        f(9, "total_distance", UInt32).scaled(100.0, 0.0),
        f(10, "total_cycles", UInt32),
        f(11, "total_calories", UInt16),
        f(12, "total_fat_calories", UInt16),
        f(13, "avg_speed", UInt16).scaled(1000.0, 0.0),
        f(14, "max_speed", UInt16).scaled(1000.0, 0.0),
        f(15, "avg_heart_rate", UInt8),
        f(16, "max_heart_rate", UInt8),
        f(17, "avg_cadence", UInt8),
        f(18, "max_cadence", UInt8),
        f(19, "avg_power", UInt16),
        f(20, "max_power", UInt16),
        f(21, "total_ascent", UInt16),
        f(22, "total_descent", UInt16),
        f(23, "sport", Enum).kind(e(&SPORT)),
        f(24, "event_group", UInt8),
        f(25, "nec_lat", SInt32).kind(COORD),
        f(26, "nec_long", SInt32).kind(COORD),
        f(27, "swc_lat", SInt32).kind(COORD),
        f(28, "swc_long", SInt32).kind(COORD),
        f(29, "name", String).sized(50),
        f(30, "normalized_power", UInt16),
        f(31, "left_right_balance", UInt16),
        f(32, "sub_sport", Enum).kind(e(&SUB_SPORT)),
        f(33, "total_work", UInt32),
        f(34, "avg_altitude", UInt16).scaled(5.0, 500.0),
        f(35, "max_altitude", UInt16).scaled(5.0, 500.0),
        f(36, "gps_accuracy", UInt8),
        f(37, "avg_grade", SInt16).scaled(100.0, 0.0),
        f(38, "avg_pos_grade", SInt16).scaled(100.0, 0.0),
        f(39, "avg_neg_grade", SInt16).scaled(100.0, 0.0),
        f(40, "max_pos_grade", SInt16).scaled(100.0, 0.0),
        f(41, "max_neg_grade", SInt16).scaled(100.0, 0.0),
        f(42, "avg_temperature", SInt8),
        f(43, "max_temperature", SInt8),
        f(44, "total_moving_time", UInt32).scaled(1000.0, 0.0),
        f(45, "avg_pos_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(46, "avg_neg_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(47, "max_pos_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(48, "max_neg_vertical_speed", SInt16).scaled(1000.0, 0.0),
        f(49, "time_in_hr_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(50, "time_in_speed_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(51, "time_in_cadence_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(52, "time_in_power_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(53, "repetition_num", UInt16),
        f(54, "min_altitude", UInt16).scaled(5.0, 500.0),
        f(55, "min_heart_rate", UInt8),
        f(56, "active_time", UInt32).scaled(1000.0, 0.0),
        f(57, "wkt_step_index", UInt16),
        f(58, "sport_event", Enum),
        f(59, "avg_left_torque_effectiveness", UInt8).scaled(2.0, 0.0),
        f(60, "avg_right_torque_effectiveness", UInt8).scaled(2.0, 0.0),
        f(61, "avg_left_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(62, "avg_right_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(63, "avg_combined_pedal_smoothness", UInt8).scaled(2.0, 0.0),
        f(64, "status", Enum),
        f(65, "uuid", String).sized(33),
        f(66, "avg_fractional_cadence", UInt8).scaled(128.0, 0.0),
        f(67, "max_fractional_cadence", UInt8).scaled(128.0, 0.0),
        f(68, "total_fractional_cycles", UInt8).scaled(128.0, 0.0),
        f(69, "front_gear_shift_count", UInt16),
        f(70, "rear_gear_shift_count", UInt16),
        f(71, "time_standing", UInt32).scaled(1000.0, 0.0),
        f(72, "stand_count", UInt16),
        f(73, "avg_left_pco", SInt8),
        f(74, "avg_right_pco", SInt8),
        f(75, "avg_left_power_phase", UInt8).kind(ARRAY),
        f(76, "avg_left_power_phase_peak", UInt8).kind(ARRAY),
        f(77, "avg_right_power_phase", UInt8).kind(ARRAY),
        f(78, "avg_right_power_phase_peak", UInt8).kind(ARRAY),
        f(79, "avg_power_position", UInt16).kind(ARRAY),
        f(80, "max_power_position", UInt16).kind(ARRAY),
        f(81, "avg_cadence_position", UInt8).kind(ARRAY),
        f(82, "max_cadence_position", UInt8).kind(ARRAY),
        f(83, "manufacturer", UInt16).kind(e(&MANUFACTURER)),
        f(84, "total_grit", Float32),
        f(85, "total_flow", Float32),
        f(86, "avg_grit", Float32),
        f(87, "avg_flow", Float32),
        f(89, "total_fractional_ascent", UInt8).scaled(100.0, 0.0),
        f(90, "total_fractional_descent", UInt8).scaled(100.0, 0.0),
        f(91, "enhanced_avg_altitude", UInt32).scaled(5.0, 500.0),
        f(92, "enhanced_max_altitude", UInt32).scaled(5.0, 500.0),
        f(93, "enhanced_min_altitude", UInt32).scaled(5.0, 500.0),
        f(253, "timestamp", UInt32).kind(TIME),
        f(254, "message_index", UInt16),
    ]),
    message!(145, "memo_glob", [
        f(0, "memo", Byte).kind(ARRAY),
        f(1, "mesg_num", UInt16),
        f(2, "parent_index", UInt16),
        f(3, "field_num", UInt8),
        f(4, "data", UInt8Z).kind(ARRAY),
        f(250, "part_index", UInt32),
    ]),
    message!(147, "sensor_settings", [
        f(0, "ant_id", UInt32Z),
        f(2, "name", String),
        f(45, "use_for_speed", Enum),
        f(46, "use_for_distance", Enum),
        f(51, "connection_type", Enum),
        f(254, "message_index", UInt16),
    ]),
    message!(148, "segment_id", [
        f(0, "name", String).sized(50),
        f(1, "uuid", String).sized(33),
        f(2, "sport", Enum).kind(e(&SPORT)),
        f(3, "enabled", Enum).kind(BOOL),
        f(4, "user_profile_primary_key", UInt32),
        f(5, "device_id", UInt32),
        f(6, "default_race_leader", UInt8),
        f(7, "delete_status", Enum),
        f(8, "selection_type", Enum),
    ]),
    message!(149, "segment_leaderboard_entry", [
        f(0, "name", String).sized(100),
        f(1, "type", Enum),
        f(2, "group_primary_key", UInt32),
        f(3, "activity_id", UInt32),
        f(4, "segment_time", UInt32).scaled(1000.0, 0.0),
        f(5, "activity_id_string", String).sized(22),
        f(254, "message_index", UInt16),
    ]),
    message!(150, "segment_point", [
        f(1, "position_lat", SInt32).kind(COORD),
        f(2, "position_long", SInt32).kind(COORD),
        f(3, "distance", UInt32).scaled(100.0, 0.0),
        f(4, "altitude", UInt16).scaled(5.0, 500.0),
        f(5, "leader_time", UInt32).sized(6).scaled(1000.0, 0.0).kind(ARRAY),
        f(6, "enhanced_altitude", UInt32).scaled(5.0, 500.0),
        f(254, "message_index", UInt16),
    ]),
    message!(151, "segment_file", [
        f(1, "file_uuid", String),
        f(3, "enabled", Enum).kind(BOOL),
        f(4, "user_profile_primary_key", UInt32),
        f(7, "leader_type", Enum).kind(ARRAY),
        f(8, "leader_group_primary_key", UInt32).kind(ARRAY),
        f(9, "leader_activity_id", UInt32).kind(ARRAY),
        f(10, "leader_activity_id_string", String),
        f(11, "default_race_leader", UInt8),
        f(254, "message_index", UInt16),
    ]),
    message!(158, "workout_session", [
        f(0, "sport", Enum).kind(e(&SPORT)),
        f(1, "sub_sport", Enum).kind(e(&SUB_SPORT)),
        f(2, "num_valid_steps", UInt16),
        f(3, "first_step_index", UInt16),
        f(4, "pool_length", UInt16).scaled(100.0, 0.0),
        f(5, "pool_length_unit", Enum),
        f(254, "message_index", UInt16),
    ]),
    message!(159, "watchface_settings", [
        f(0, "mode", Enum),
        f(1, "layout", Byte),
        f(254, "message_index", UInt16),
    ]),
    message!(160, "gps_metadata", [
        f(0, "timestamp_ms", UInt16),
        f(1, "position_lat", SInt32).kind(COORD),
        f(2, "position_long", SInt32).kind(COORD),
        f(3, "enhanced_altitude", UInt32).scaled(5.0, 500.0),
        f(4, "enhanced_speed", UInt32).scaled(1000.0, 0.0),
        f(5, "heading", UInt16).scaled(100.0, 0.0),
        f(6, "utc_timestamp", UInt32),
        f(7, "velocity", SInt16).sized(3).scaled(100.0, 0.0).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(161, "camera_event", [
        f(0, "timestamp_ms", UInt16),
        f(1, "camera_event_type", Enum),
        f(2, "camera_file_uuid", String),
        f(3, "camera_orientation", Enum),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(162, "timestamp_correlation", [
        f(0, "fractional_timestamp", UInt16).scaled(32768.0, 0.0),
        f(1, "system_timestamp", UInt32),
        f(2, "fractional_system_timestamp", UInt16).scaled(32768.0, 0.0),
        f(3, "local_timestamp", UInt32),
        f(4, "timestamp_ms", UInt16),
        f(5, "system_timestamp_ms", UInt16),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(164, "gyroscope_data", [
        f(0, "timestamp_ms", UInt16),
        f(1, "sample_time_offset", UInt16).kind(ARRAY),
        f(2, "gyro_x", UInt16).kind(ARRAY),
        f(3, "gyro_y", UInt16).kind(ARRAY),
        f(4, "gyro_z", UInt16).kind(ARRAY),
        f(5, "calibrated_gyro_x", Float32).kind(ARRAY),
        f(6, "calibrated_gyro_y", Float32).kind(ARRAY),
        f(7, "calibrated_gyro_z", Float32).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(165, "accelerometer_data", [
        f(0, "timestamp_ms", UInt16),
        f(1, "sample_time_offset", UInt16).kind(ARRAY),
        f(2, "accel_x", UInt16).kind(ARRAY),
        f(3, "accel_y", UInt16).kind(ARRAY),
        f(4, "accel_z", UInt16).kind(ARRAY),
        f(5, "calibrated_accel_x", Float32).kind(ARRAY),
        f(6, "calibrated_accel_y", Float32).kind(ARRAY),
        f(7, "calibrated_accel_z", Float32).kind(ARRAY),
        f(8, "compressed_calibrated_accel_x", SInt16).kind(ARRAY),
        f(9, "compressed_calibrated_accel_y", SInt16).kind(ARRAY),
        f(10, "compressed_calibrated_accel_z", SInt16).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(167, "three_d_sensor_calibration", [
        f(0, "sensor_type", Enum),
        f(1, "calibration_factor", UInt32),
        f(2, "calibration_divisor", UInt32),
        f(3, "level_shift", UInt32),
        f(4, "offset_cal", SInt32).sized(3).kind(ARRAY),
        f(5, "orientation_matrix", SInt32).sized(9).scaled(65535.0, 0.0).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(169, "video_frame", [
        f(0, "timestamp_ms", UInt16),
        f(1, "frame_number", UInt32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(174, "obdii_data", [
        f(0, "timestamp_ms", UInt16),
        f(1, "time_offset", UInt16).kind(ARRAY),
        f(2, "pid", Byte),
        f(3, "raw_data", Byte).kind(ARRAY),
        f(4, "pid_data_size", UInt8).kind(ARRAY),
        f(5, "system_time", UInt32).kind(ARRAY),
        f(6, "start_timestamp", UInt32),
        f(7, "start_timestamp_ms", UInt16),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(177, "nmea_sentence", [
        f(0, "timestamp_ms", UInt16),
        f(1, "sentence", String),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(178, "aviation_attitude", [
        f(0, "timestamp_ms", UInt16),
        f(1, "system_time", UInt32).kind(ARRAY),
        f(2, "pitch", SInt16).kind(ARRAY),
        f(3, "roll", SInt16).kind(ARRAY),
        f(4, "accel_lateral", SInt16).scaled(100.0, 0.0).kind(ARRAY),
        f(5, "accel_normal", SInt16).scaled(100.0, 0.0).kind(ARRAY),
        f(6, "turn_rate", SInt16).scaled(1024.0, 0.0).kind(ARRAY),
        f(7, "stage", Enum).kind(ARRAY),
        f(8, "attitude_stage_complete", UInt8).kind(ARRAY),
        f(9, "track", UInt16).kind(ARRAY),
        f(10, "validity", UInt16).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(184, "video", [
        f(0, "url", String),
        f(1, "hosting_provider", String),
        f(2, "duration", UInt32),
    ]),
    message!(185, "video_title", [
        f(0, "message_count", UInt16),
        f(1, "text", String),
        f(254, "message_index", UInt16),
    ]),
    message!(186, "video_description", [
        f(0, "message_count", UInt16),
        f(1, "text", String),
        f(254, "message_index", UInt16),
    ]),
    message!(187, "video_clip", [
        f(0, "clip_number", UInt16),
        f(1, "start_timestamp", UInt32),
        f(2, "start_timestamp_ms", UInt16),
        f(3, "end_timestamp", UInt32),
        f(4, "end_timestamp_ms", UInt16),
        f(6, "clip_start", UInt32),
        f(7, "clip_end", UInt32),
    ]),
    message!(188, "ohr_settings", [
        f(0, "enabled", Enum).kind(BOOL),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(200, "exd_screen_configuration", [
        f(0, "screen_index", UInt8),
        f(1, "field_count", UInt8),
        f(2, "layout", Enum),
        f(3, "screen_enabled", Enum).kind(BOOL),
    ]),
    message!(201, "exd_data_field_configuration", [
        f(0, "screen_index", UInt8),
        f(1, "concept_field", Byte),
        f(2, "field_id", UInt8),
        f(3, "concept_count", UInt8),
        f(4, "display_type", Enum),
        f(5, "title", String).sized(32),
    ]),
    message!(202, "exd_data_concept_configuration", [
        f(0, "screen_index", UInt8),
        f(1, "concept_field", Byte),
        f(2, "field_id", UInt8),
        f(3, "concept_count", UInt8),
        f(4, "data_page", UInt8),
        f(5, "concept_key", UInt8),
        f(6, "scaling", UInt8),
        f(8, "data_units", Enum),
        f(9, "qualifier", Enum),
        f(10, "descriptor", Enum),
        f(11, "is_signed", Enum).kind(BOOL),
    ]),
    message!(206, "field_description", [
        f(0, "developer_data_index", UInt8),
        f(1, "field_definition_number", UInt8),
        f(2, "fit_base_type_id", UInt8),
        f(3, "field_name", String).sized(64),
        f(4, "array", UInt8),
        f(5, "components", String).sized(64),
        f(6, "scale", UInt8),
        f(7, "offset", SInt8),
        f(8, "units", String).sized(16),
        f(9, "bits", String).sized(16),
        f(10, "accumulate", String).sized(16),
        f(13, "fit_base_unit_id", UInt16),
        f(14, "native_mesg_num", UInt16),
        f(15, "native_field_num", UInt8),
    ]),
    message!(207, "developer_data_id", [
        f(0, "developer_id", Byte).sized(16),
        f(1, "application_id", Byte).sized(16),
        f(2, "manufacturer_id", UInt16).kind(e(&MANUFACTURER)),
        f(3, "developer_data_index", UInt8),
        f(4, "application_version", UInt32),
    ]),
    message!(208, "magnetometer_data", [
        f(0, "timestamp_ms", UInt16),
        f(1, "sample_time_offset", UInt16).kind(ARRAY),
        f(2, "mag_x", UInt16).kind(ARRAY),
        f(3, "mag_y", UInt16).kind(ARRAY),
        f(4, "mag_z", UInt16).kind(ARRAY),
        f(5, "calibrated_mag_x", Float32).kind(ARRAY),
        f(6, "calibrated_mag_y", Float32).kind(ARRAY),
        f(7, "calibrated_mag_z", Float32).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(209, "barometer_data", [
        f(0, "timestamp_ms", UInt16),
        f(1, "sample_time_offset", UInt16).kind(ARRAY),
        f(2, "baro_pres", UInt32).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(210, "one_d_sensor_calibration", [
        f(0, "sensor_type", Enum),
        f(1, "calibration_factor", UInt32),
        f(2, "calibration_divisor", UInt32),
        f(3, "level_shift", UInt32),
        f(4, "offset_cal", SInt32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(211, "monitoring_hr_data", [
        f(0, "resting_heart_rate", UInt8),
        f(1, "current_day_resting_heart_rate", UInt8),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(216, "time_in_zone", [
        f(0, "reference_mesg", UInt16),
        f(1, "reference_index", UInt16),
        f(2, "time_in_zone", UInt32).sized(24).scaled(1000.0, 0.0).kind(ARRAY),
        f(3, "time_in_speed_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(4, "time_in_cadence_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(5, "time_in_power_zone", UInt32).scaled(1000.0, 0.0).kind(ARRAY),
        f(6, "hr_zone_high_boundary", UInt8).sized(6).kind(ARRAY),
        f(7, "speed_zone_high_boundary", UInt16).scaled(1000.0, 0.0).kind(ARRAY),
        f(8, "cadence_zone_high_boundary", UInt8).kind(ARRAY),
        f(9, "power_zone_high_boundary", UInt16).kind(ARRAY),
        f(10, "hr_calc_type", Enum),
        f(11, "max_heart_rate", UInt8),
        f(12, "resting_heart_rate", UInt8),
        f(13, "threshold_heart_rate", UInt8),
        f(14, "pwr_calc_type", Enum),
        f(15, "functional_threshold_power", UInt16),
        f(253, "timestamp", UInt32).kind(TIME),
        f(254, "message_index", UInt16),
    ]),
    message!(222, "alarm_settings", [
        f(0, "time", UInt16),
        f(1, "repeat", UInt32Z),
        f(2, "enabled", Enum).kind(BOOL),
        f(3, "sound", Enum),
        f(4, "backlight", Enum),
        f(5, "some_timestamp", UInt32).kind(TIME),
        f(7, "unknown7", UInt8),
        f(8, "label", Enum),
        f(254, "message_index", UInt16),
    ]),
    message!(225, "set", [
        f(0, "duration", UInt32).scaled(1000.0, 0.0),
        f(3, "repetitions", UInt16),
        f(4, "weight", UInt16).scaled(16.0, 0.0),
        f(5, "set_type", UInt8),
        f(6, "start_time", UInt32).kind(TIME),
        f(7, "category", UInt16).kind(e(&EXERCISE_CATEGORY)),
        f(8, "category_subtype", UInt16).kind(ARRAY),
        f(9, "weight_display_unit", UInt16),
        f(10, "message_index", UInt16),
        f(11, "wkt_step_index", UInt16),
        f(254, "timestamp", UInt32).kind(TIME),
    ]),
    message!(227, "stress_level", [
        f(0, "stress_level_value", SInt16),
        f(1, "stress_level_time", UInt32).kind(TIME),
        f(3, "body_energy", SInt8),
    ]),
    message!(229, "max_met_data", [
        f(0, "update_time", UInt32).kind(TIME),
        f(2, "vo2_max", UInt16).scaled(10.0, 0.0),
        f(5, "sport", Enum).kind(e(&SPORT)),
        f(6, "sub_sport", Enum).kind(e(&SUB_SPORT)),
        f(8, "max_met_category", Enum),
        f(9, "calibrated_data", Enum),
        f(12, "hr_source", Enum),
        f(13, "speed_source", Enum),
    ]),
    message!(258, "dive_settings", [
        f(0, "name", String),
        f(1, "model", Enum),
        f(2, "gf_low", UInt8),
        f(3, "gf_high", UInt8),
        f(4, "water_type", Enum),
        f(5, "water_density", Float32),
        f(6, "po2_warn", UInt8).scaled(100.0, 0.0),
        f(7, "po2_critical", UInt8).scaled(100.0, 0.0),
        f(8, "po2_deco", UInt8).scaled(100.0, 0.0),
        f(9, "safety_stop_enabled", Enum).kind(BOOL),
        f(10, "bottom_depth", Float32),
        f(11, "bottom_time", UInt32),
        f(12, "apnea_countdown_enabled", Enum).kind(BOOL),
        f(13, "apnea_countdown_time", UInt32),
        f(14, "backlight_mode", Enum),
        f(15, "backlight_brightness", UInt8),
        f(16, "backlight_timeout", UInt8),
        f(17, "repeat_dive_interval", UInt16),
        f(18, "safety_stop_time", UInt16),
        f(19, "heart_rate_source_type", Enum),
        f(20, "heart_rate_source", UInt8),
        f(21, "travel_gas", UInt16),
        f(22, "ccr_low_setpoint_switch_mode", Enum),
        f(23, "ccr_low_setpoint", UInt8).scaled(100.0, 0.0),
        f(24, "ccr_low_setpoint_depth", UInt32).scaled(1000.0, 0.0),
        f(25, "ccr_high_setpoint_switch_mode", Enum),
        f(26, "ccr_high_setpoint", UInt8).scaled(100.0, 0.0),
        f(27, "ccr_high_setpoint_depth", UInt32).scaled(1000.0, 0.0),
        f(29, "gas_consumption_display", Enum),
        f(30, "up_key_enabled", Enum).kind(BOOL),
        f(35, "dive_sounds", Enum),
        f(36, "last_stop_multiple", UInt8).scaled(10.0, 0.0),
        f(37, "no_fly_time_mode", Enum),
        f(253, "timestamp", UInt32).kind(TIME),
        f(254, "message_index", UInt16),
    ]),
    message!(259, "dive_gas", [
        f(0, "helium_content", UInt8),
        f(1, "oxygen_content", UInt8),
        f(2, "status", Enum),
        f(3, "mode", Enum),
        f(254, "message_index", UInt16),
    ]),
    message!(262, "dive_alarm", [
        f(0, "depth", UInt32).scaled(1000.0, 0.0),
        f(1, "time", SInt32),
        f(2, "enabled", Enum).kind(BOOL),
        f(3, "alarm_type", Enum),
        f(4, "sound", Enum),
        f(5, "dive_types", Enum).kind(ARRAY),
        f(6, "id", UInt32),
        f(7, "popup_enabled", Enum).kind(BOOL),
        f(8, "trigger_on_descent", Enum).kind(BOOL),
        f(9, "trigger_on_ascent", Enum).kind(BOOL),
        f(10, "repeating", Enum).kind(BOOL),
        f(11, "speed", SInt32).scaled(1000.0, 0.0),
        f(254, "message_index", UInt16),
    ]),
    message!(264, "exercise_title", [
        f(0, "exercise_category", UInt16),
        f(1, "exercise_name", UInt16),
        f(2, "wkt_step_name", String),
        f(254, "message_index", UInt16),
    ]),
    message!(268, "dive_summary", [
        f(0, "reference_mesg", UInt16),
        f(1, "reference_index", UInt16),
        f(2, "avg_depth", UInt32).scaled(1000.0, 0.0),
        f(3, "max_depth", UInt32).scaled(1000.0, 0.0),
        f(4, "surface_interval", UInt32),
        f(5, "start_cns", UInt8),
        f(6, "end_cns", UInt8),
        f(7, "start_n2", UInt16),
        f(8, "end_n2", UInt16),
        f(9, "o2_toxicity", UInt16),
        f(10, "dive_number", UInt32),
        f(11, "bottom_time", UInt32).scaled(1000.0, 0.0),
        f(12, "avg_pressure_sac", UInt16).scaled(100.0, 0.0),
        f(13, "avg_volume_sac", UInt16).scaled(100.0, 0.0),
        f(14, "avg_rmv", UInt16).scaled(100.0, 0.0),
        f(15, "descent_time", UInt32).scaled(1000.0, 0.0),
        f(16, "ascent_time", UInt32).scaled(1000.0, 0.0),
        f(17, "avg_ascent_rate", SInt32).scaled(1000.0, 0.0),
        f(22, "avg_descent_rate", UInt32).scaled(1000.0, 0.0),
        f(23, "max_ascent_rate", UInt32).scaled(1000.0, 0.0),
        f(24, "max_descent_rate", UInt32).scaled(1000.0, 0.0),
        f(25, "hang_time", UInt32).scaled(1000.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(269, "spo2_data", [
        f(0, "reading_spo2", UInt8),
        f(1, "reading_confidence", UInt8),
        f(2, "mode", Enum),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(273, "sleep_data_info", [
        f(0, "unk0", UInt8),
        f(1, "sample_length", UInt16),
        f(2, "local_timestamp", UInt32),
        f(3, "unk3", Enum),
        f(4, "version", String),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(274, "sleep_data_raw", [
        f(0, "bytes", Byte),
    ]),
    message!(275, "sleep_level", [
        f(0, "sleep_level", Enum).kind(e(&SLEEP_LEVEL)),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(285, "jump", [
        f(0, "distance", Float32),
        f(1, "heigh", Float32),
        f(2, "rotations", UInt8),
        f(3, "hang_time", Float32),
        f(4, "score", Float32),
        f(5, "position_lat", SInt32).kind(COORD),
        f(6, "position_long", SInt32).kind(COORD),
        f(7, "speed", UInt16).scaled(1000.0, 0.0),
        f(8, "enhanced_speed", UInt32).scaled(1000.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(289, "aad_accel_features", [
        f(0, "time", UInt16),
        f(1, "energy_total", UInt32),
        f(2, "zero_cross_cnt", UInt16),
        f(3, "instance", UInt8),
        f(4, "time_above_threshold", UInt16),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(290, "beat_intervals", [
        f(0, "timestamp_ms", UInt16),
        f(1, "time", UInt16).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(297, "respiration_rate", [
        f(0, "respiration_rate", SInt16).scaled(100.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(302, "hsa_accelerometer_data", [
        f(0, "timestamp_ms", UInt16),
        f(1, "sampling_interval", UInt16),
        f(2, "accel_x", SInt16).kind(ARRAY),
        f(3, "accel_y", SInt16).kind(ARRAY),
        f(4, "accel_z", SInt16).kind(ARRAY),
        f(5, "timestamp_32k", UInt32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(304, "hsa_step_data", [
        f(0, "processing_interval", UInt16),
        f(1, "steps", UInt32).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(305, "hsa_spo2_data", [
        f(0, "processing_interval", UInt16),
        f(1, "reading_spo2", UInt8).kind(ARRAY),
        f(2, "confidence", UInt8).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(306, "hsa_stress_data", [
        f(0, "processing_interval", UInt16),
        f(1, "stress_level", SInt8).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(307, "hsa_respiration_data", [
        f(0, "processing_interval", UInt16),
        f(1, "respiration_rate", SInt16).scaled(100.0, 0.0).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(308, "hsa_heart_rate_data", [
        f(0, "processing_interval", UInt16),
        f(1, "status", UInt8),
        f(2, "heart_rate", UInt8).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(312, "split", [
        f(0, "split_type", Enum),
        f(1, "total_elapsed_time", UInt32).scaled(1000.0, 0.0),
        f(2, "total_timer_time", UInt32).scaled(1000.0, 0.0),
        f(3, "total_distance", UInt32).scaled(100.0, 0.0),
        f(4, "avg_speed", UInt32).scaled(1000.0, 0.0),
        f(9, "start_time", UInt32),
        f(13, "total_ascent", UInt16),
        f(14, "total_descent", UInt16),
        f(21, "start_position_lat", SInt32).kind(COORD),
        f(22, "start_position_long", SInt32).kind(COORD),
        f(23, "end_position_lat", SInt32).kind(COORD),
        f(24, "end_position_long", SInt32).kind(COORD),
        f(25, "max_speed", UInt32).scaled(1000.0, 0.0),
        f(26, "avg_vert_speed", SInt32).scaled(1000.0, 0.0),
        f(27, "end_time", UInt32),
        f(28, "total_calories", UInt32),
        f(74, "start_elevation", UInt32).scaled(5.0, 500.0),
        f(110, "total_moving_time", UInt32).scaled(1000.0, 0.0),
        f(254, "message_index", UInt16),
    ]),
    message!(313, "split_summary", [
        f(0, "split_type", Enum),
        f(3, "num_splits", UInt16),
        f(4, "total_timer_time", UInt32).scaled(1000.0, 0.0),
        f(5, "total_distance", UInt32).scaled(100.0, 0.0),
        f(6, "avg_speed", UInt32).scaled(1000.0, 0.0),
        f(7, "max_speed", UInt32).scaled(1000.0, 0.0),
        f(8, "total_ascent", UInt16),
        f(9, "total_descent", UInt16),
        f(10, "avg_heart_rate", UInt8),
        f(11, "max_heart_rate", UInt8),
        f(12, "avg_vert_speed", SInt32).scaled(1000.0, 0.0),
        f(13, "total_calories", UInt32),
        f(77, "total_moving_time", UInt32).scaled(1000.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
        f(254, "message_index", UInt16),
    ]),
    message!(314, "hsa_body_battery_data", [
        f(0, "processing_interval", UInt16),
        f(1, "level", SInt8).kind(ARRAY),
        f(2, "charged", SInt16).kind(ARRAY),
        f(3, "uncharged", SInt16).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(315, "hsa_event", [
        f(0, "event_id", UInt8),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(317, "climb_pro", [
        f(0, "position_lat", SInt32).kind(COORD),
        f(1, "position_long", SInt32).kind(COORD),
        f(2, "climb_pro_event", Enum),
        f(3, "climb_number", UInt16),
        f(4, "climb_category", UInt8),
        f(5, "current_dist", Float32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(319, "tank_update", [
        f(0, "sensor", UInt32Z),
        f(1, "pressure", UInt16).scaled(100.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(323, "tank_summary", [
        f(0, "sensor", UInt32Z),
        f(1, "start_pressure", UInt16).scaled(100.0, 0.0),
        f(2, "end_pressure", UInt16).scaled(100.0, 0.0),
        f(3, "volume_used", UInt32).scaled(100.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(326, "gps_event", [
        f(0, "event_type", UInt32),
        f(1, "data", UInt32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(336, "ecg_summary", [
        f(0, "unknown_0", UInt16),
        f(1, "unknown_1", Enum),
        f(2, "unknown_2", Float32),
        f(3, "unknown_3", Float32),
        f(4, "ecg_timestamp", UInt32).kind(TIME),
        f(5, "local_timestamp", UInt32),
        f(6, "unknown_6", Enum),
        f(7, "average_heart_rate", Float32),
        f(10, "unknown_10", String),
        f(11, "unknown_11", UInt16),
        f(12, "unknown_12", UInt8),
    ]),
    message!(337, "ecg_raw_sample", [
        f(0, "value", Float32),
    ]),
    message!(338, "ecg_smooth_sample", [
        f(0, "value", Float32),
    ]),
    message!(346, "sleep_stats", [
        f(0, "combined_awake_score", UInt8),
        f(1, "awake_time_score", UInt8),
        f(2, "awakenings_count_score", UInt8),
        f(3, "deep_sleep_score", UInt8),
        f(4, "sleep_duration_score", UInt8),
        f(5, "light_sleep_score", UInt8),
        f(6, "overall_sleep_score", UInt8),
        f(7, "sleep_quality_score", UInt8),
        f(8, "sleep_recovery_score", UInt8),
        f(9, "rem_sleep_score", UInt8),
        f(10, "sleep_restlessness_score", UInt8),
        f(11, "awakenings_count", UInt8),
        f(12, "unk_12", Enum),
        f(13, "unk_13", Enum),
        f(14, "interruptions_score", UInt8),
        f(15, "average_stress_during_sleep", UInt16).scaled(100.0, 0.0),
        f(16, "unk_16", Enum),
    ]),
    message!(370, "hrv_summary", [
        f(0, "weekly_average", UInt16).scaled(128.0, 0.0),
        f(1, "last_night_average", UInt16).scaled(128.0, 0.0),
        f(2, "last_night_5_min_high", UInt16).scaled(128.0, 0.0),
        f(3, "baseline_low_upper", UInt16).scaled(128.0, 0.0),
        f(4, "baseline_balanced_lower", UInt16).scaled(128.0, 0.0),
        f(5, "baseline_balanced_upper", UInt16).scaled(128.0, 0.0),
        f(6, "status", Enum).kind(e(&HRV_STATUS)),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(371, "hrv_value", [
        f(0, "value", UInt16).scaled(128.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(372, "raw_bbi", [
        f(0, "timestamp_ms", UInt16),
        f(1, "data", UInt16).kind(ARRAY),
        f(2, "time", UInt16).kind(ARRAY),
        f(3, "quality", UInt8).kind(ARRAY),
        f(4, "gap", UInt8).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(375, "device_aux_battery_info", [
        f(0, "device_index", UInt8),
        f(1, "battery_voltage", UInt16).scaled(256.0, 0.0),
        f(2, "battery_status", UInt8),
        f(3, "battery_identifier", UInt8),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(376, "hsa_gyroscope_data", [
        f(0, "timestamp_ms", UInt16),
        f(1, "sampling_interval", UInt16),
        f(2, "gyro_x", SInt16).kind(ARRAY),
        f(3, "gyro_y", SInt16).kind(ARRAY),
        f(4, "gyro_z", SInt16).kind(ARRAY),
        f(5, "timestamp_32k", UInt32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(378, "training_load", [
        f(3, "training_load_acute", UInt16),
        f(4, "training_load_chronic", UInt16),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(379, "sleep_schedule", [
        f(0, "bed_time", UInt32),
        f(1, "wake_time", UInt32),
        f(254, "message_index", UInt16),
    ]),
    message!(387, "chrono_shot_session", [
        f(0, "min_speed", UInt32).scaled(1000.0, 0.0),
        f(1, "max_speed", UInt32).scaled(1000.0, 0.0),
        f(2, "avg_speed", UInt32).scaled(1000.0, 0.0),
        f(3, "shot_count", UInt16),
        f(4, "projectile_type", Enum),
        f(5, "grain_weight", UInt32).scaled(10.0, 0.0),
        f(6, "standard_deviation", UInt32).scaled(1000.0, 0.0),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(388, "chrono_shot_data", [
        f(0, "shot_speed", UInt32).scaled(1000.0, 0.0),
        f(1, "shot_num", UInt16),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(389, "hsa_configuration_data", [
        f(0, "data", Byte).kind(ARRAY),
        f(1, "data_size", UInt8),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(393, "dive_apnea_alarm", [
        f(0, "depth", UInt32).scaled(1000.0, 0.0),
        f(1, "time", SInt32),
        f(2, "enabled", Enum).kind(BOOL),
        f(3, "alarm_type", Enum),
        f(4, "sound", Enum),
        f(5, "dive_types", Enum).kind(ARRAY),
        f(6, "id", UInt32),
        f(7, "popup_enabled", Enum).kind(BOOL),
        f(8, "trigger_on_descent", Enum).kind(BOOL),
        f(9, "trigger_on_ascent", Enum).kind(BOOL),
        f(10, "repeating", Enum).kind(BOOL),
        f(11, "speed", SInt32).scaled(1000.0, 0.0),
        f(254, "message_index", UInt16),
    ]),
    message!(394, "cpe_status", [
        f(0, "status", Enum),
        f(1, "start_time", UInt32),
        f(2, "end_time", UInt32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(397, "skin_temp_raw", [
        f(1, "deviation", Float32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(398, "skin_temp_overnight", [
        f(0, "local_timestamp", UInt32),
        f(1, "average_deviation", Float32),
        f(2, "average_7_day_deviation", Float32),
        f(3, "unk3", UInt8),
        f(4, "nightly_value", Float32),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(409, "hsa_wrist_temperature_data", [
        f(0, "processing_interval", UInt16),
        f(1, "value", UInt16).scaled(1000.0, 0.0).kind(ARRAY),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
    message!(412, "nap", [
        f(0, "start_timestamp", UInt32).kind(TIME),
        f(1, "unknown_1", SInt16),
        f(2, "end_timestamp", UInt32).kind(TIME),
        f(3, "unknown_3", SInt16),
        f(4, "unknown_4", Enum),
        f(6, "unknown_6", Enum),
        f(7, "timestamp_7", UInt32).kind(TIME),
        f(253, "timestamp", UInt32).kind(TIME),
    ]),
];
