//! Named values of enumerated fields.

use super::EnumTable;

macro_rules! enum_table {
    ($(#[$attr:meta])* $ident:ident = $name:literal { $($value:literal => $label:literal,)* }) => {
        $(#[$attr])*
        pub static $ident: EnumTable = EnumTable {
            name: $name,
            values: &[$(($value, $label),)*],
        };
    };
}

enum_table!(FILE = "file" {
    1 => "device",
    2 => "settings",
    3 => "sport",
    4 => "activity",
    5 => "workout",
    6 => "course",
    7 => "schedules",
    9 => "weight",
    10 => "totals",
    11 => "goals",
    14 => "blood_pressure",
    15 => "monitoring_a",
    20 => "activity_summary",
    28 => "monitoring_daily",
    32 => "monitoring_b",
    34 => "segment",
    35 => "segment_list",
    40 => "exd_configuration",
});

enum_table!(MANUFACTURER = "manufacturer" {
    1 => "garmin",
    2 => "garmin_fr405_antfs",
    3 => "zephyr",
    15 => "dynastream",
    23 => "suunto",
    32 => "wahoo_fitness",
    69 => "stages_cycling",
    89 => "tacx",
    255 => "development",
    260 => "zwift",
    265 => "strava",
    294 => "coros",
});

enum_table!(SPORT = "sport" {
    0 => "generic",
    1 => "running",
    2 => "cycling",
    3 => "transition",
    4 => "fitness_equipment",
    5 => "swimming",
    6 => "basketball",
    7 => "soccer",
    8 => "tennis",
    9 => "american_football",
    10 => "training",
    11 => "walking",
    12 => "cross_country_skiing",
    13 => "alpine_skiing",
    14 => "snowboarding",
    15 => "rowing",
    16 => "mountaineering",
    17 => "hiking",
    18 => "multisport",
    19 => "paddling",
    254 => "all",
});

enum_table!(SUB_SPORT = "sub_sport" {
    0 => "generic",
    1 => "treadmill",
    2 => "street",
    3 => "trail",
    4 => "track",
    5 => "spin",
    6 => "indoor_cycling",
    7 => "road",
    8 => "mountain",
    9 => "downhill",
    10 => "recumbent",
    11 => "cyclocross",
    17 => "lap_swimming",
    18 => "open_water",
    20 => "strength_training",
    254 => "all",
});

enum_table!(GENDER = "gender" {
    0 => "female",
    1 => "male",
});

enum_table!(LANGUAGE = "language" {
    0 => "english",
    1 => "french",
    2 => "italian",
    3 => "german",
    4 => "spanish",
    5 => "croatian",
    6 => "czech",
    7 => "danish",
    8 => "dutch",
    9 => "finnish",
    10 => "greek",
    11 => "hungarian",
    12 => "norwegian",
    13 => "polish",
    14 => "portuguese",
    15 => "slovakian",
    16 => "slovenian",
    17 => "swedish",
    18 => "russian",
    19 => "turkish",
    254 => "custom",
});

enum_table!(DISPLAY_MEASURE = "display_measure" {
    0 => "metric",
    1 => "statute",
    2 => "nautical",
});

enum_table!(EVENT = "event" {
    0 => "timer",
    3 => "workout",
    4 => "workout_step",
    5 => "power_down",
    6 => "power_up",
    7 => "off_course",
    8 => "session",
    9 => "lap",
    10 => "course_point",
    11 => "battery",
    12 => "virtual_partner_pace",
    13 => "hr_high_alert",
    14 => "hr_low_alert",
    22 => "recovery_hr",
    26 => "activity",
    42 => "front_gear_change",
    43 => "rear_gear_change",
});

enum_table!(EVENT_TYPE = "event_type" {
    0 => "start",
    1 => "stop",
    2 => "consecutive_depreciated",
    3 => "marker",
    4 => "stop_all",
    5 => "begin_depreciated",
    6 => "end_depreciated",
    7 => "end_all_depreciated",
    8 => "stop_disable",
    9 => "stop_disable_all",
});

enum_table!(ACTIVITY = "activity" {
    0 => "manual",
    1 => "auto_multi_sport",
});

enum_table!(INTENSITY = "intensity" {
    0 => "active",
    1 => "rest",
    2 => "warmup",
    3 => "cooldown",
    4 => "recovery",
    5 => "interval",
    6 => "other",
});

enum_table!(LAP_TRIGGER = "lap_trigger" {
    0 => "manual",
    1 => "time",
    2 => "distance",
    3 => "position_start",
    4 => "position_lap",
    5 => "position_waypoint",
    6 => "position_marked",
    7 => "session_end",
    8 => "fitness_equipment",
});

enum_table!(COURSE_POINT = "course_point" {
    0 => "generic",
    1 => "summit",
    2 => "valley",
    3 => "water",
    4 => "food",
    5 => "danger",
    6 => "left",
    7 => "right",
    8 => "straight",
    9 => "first_aid",
});

enum_table!(SWIM_STROKE = "swim_stroke" {
    0 => "freestyle",
    1 => "backstroke",
    2 => "breaststroke",
    3 => "butterfly",
    4 => "drill",
    5 => "mixed",
    6 => "im",
});

enum_table!(BATTERY_STATUS = "battery_status" {
    1 => "new",
    2 => "good",
    3 => "ok",
    4 => "low",
    5 => "critical",
    6 => "charging",
    7 => "unknown",
});

enum_table!(SLEEP_LEVEL = "sleep_level" {
    0 => "unmeasurable",
    1 => "awake",
    2 => "light",
    3 => "deep",
    4 => "rem",
});

enum_table!(HRV_STATUS = "hrv_status" {
    0 => "none",
    1 => "poor",
    2 => "low",
    3 => "unbalanced",
    4 => "balanced",
});

enum_table!(WEATHER_REPORT = "weather_report" {
    0 => "current",
    1 => "hourly_forecast",
    2 => "daily_forecast",
});

enum_table!(DAY_OF_WEEK = "day_of_week" {
    0 => "sunday",
    1 => "monday",
    2 => "tuesday",
    3 => "wednesday",
    4 => "thursday",
    5 => "friday",
    6 => "saturday",
});

enum_table!(GOAL_TYPE = "goal" {
    0 => "time",
    1 => "distance",
    2 => "calories",
    3 => "frequency",
    4 => "steps",
    5 => "ascent",
    6 => "active_minutes",
});

enum_table!(GOAL_SOURCE = "goal_source" {
    0 => "auto",
    1 => "community",
    2 => "user",
});

enum_table!(WEATHER_CONDITION = "weather_status" {
    0 => "clear",
    1 => "partly_cloudy",
    2 => "mostly_cloudy",
    3 => "rain",
    4 => "snow",
    5 => "windy",
    6 => "thunderstorms",
    7 => "wintry_mix",
    8 => "fog",
    11 => "hazy",
    12 => "hail",
    13 => "scattered_showers",
    14 => "scattered_thunderstorms",
    15 => "unknown_precipitation",
    16 => "light_rain",
    17 => "heavy_rain",
    18 => "light_snow",
    19 => "heavy_snow",
    20 => "light_rain_snow",
    21 => "heavy_rain_snow",
    22 => "cloudy",
});

enum_table!(AIR_QUALITY = "air_quality" {
    0 => "good",
    1 => "moderate",
    2 => "unhealthy_sensitive",
    3 => "unhealthy",
    4 => "very_unhealthy",
    5 => "hazardous",
});

enum_table!(EXERCISE_CATEGORY = "exercise_category" {
    0 => "bench_press",
    1 => "calf_raise",
    2 => "cardio",
    3 => "carry",
    4 => "chop",
    5 => "core",
    6 => "crunch",
    7 => "curl",
    8 => "deadlift",
    9 => "flye",
    10 => "hip_raise",
    11 => "hip_stability",
    12 => "hip_swing",
    13 => "hyperextension",
    14 => "lateral_raise",
    15 => "leg_curl",
    16 => "leg_raise",
    17 => "lunge",
    18 => "olympic_lift",
    19 => "plank",
    20 => "plyo",
    21 => "pull_up",
    22 => "push_up",
    23 => "row",
    24 => "shoulder_press",
    25 => "shoulder_stability",
    26 => "shrug",
    27 => "sit_up",
    28 => "squat",
    29 => "total_body",
    30 => "triceps_extension",
    31 => "warm_up",
    32 => "run",
    250 => "unknown",
});

/// Map symbols attached to saved locations.
enum_table!(LOCATION_SYMBOL = "location_symbol" {
    0 => "airport",
    1 => "amusement_park",
    2 => "anchor",
    3 => "ball_park",
    4 => "bank",
    5 => "bar",
    6 => "block_blue",
    7 => "boat_ramp",
    8 => "bowling",
    9 => "bridge",
    10 => "building",
    11 => "campground",
    12 => "car",
    13 => "car_rental",
    14 => "car_repair",
    15 => "cemetery",
    16 => "church",
    17 => "city_large",
    18 => "city_medium",
    19 => "city_small",
    20 => "civil",
    21 => "controlled_area",
    22 => "convenience_store",
    23 => "crossing",
    24 => "dam",
    25 => "skull_and_crossbones",
    26 => "danger_area",
    27 => "department_store",
    28 => "diver_down_flag_1",
    29 => "diver_down_flag_2",
    30 => "drinking_water",
    31 => "unknown_31",
    32 => "fast_food",
    33 => "fishing_area",
    34 => "fitness_center",
    35 => "forest",
    36 => "gas_station",
    37 => "glider_area",
    38 => "golf_course",
    39 => "lodging",
    40 => "hunting_area",
    41 => "information",
    42 => "live_theater",
    43 => "light",
    44 => "man_overboard",
    45 => "medical_facility",
    46 => "mine",
    47 => "movie_theater",
    48 => "museum",
    49 => "oil_field",
    50 => "parachute_area",
    51 => "park",
    52 => "parking_area",
    53 => "pharmacy",
    54 => "picnic_area",
    55 => "pizza",
    56 => "post_office",
    57 => "rv_park",
    58 => "residence",
    59 => "restricted_area",
    60 => "restaurant",
    61 => "restroom",
    62 => "scales",
    63 => "scenic_area",
    64 => "school",
    65 => "shipwreck",
    66 => "shopping_center",
    67 => "short_tower",
    68 => "shower",
    69 => "skiing_area",
    70 => "stadium",
    71 => "summit",
    72 => "swimming_area",
    73 => "tall_tower",
    74 => "telephone",
    75 => "toll_booth",
    76 => "trail_head",
    77 => "truck_stop",
    78 => "tunnel",
    79 => "ultralight_area",
    80 => "zoo",
    81 => "geocache",
    82 => "geocache_found",
    83 => "flag_blue",
    84 => "pin_blue",
    85 => "bike_trail",
    86 => "ice_skating",
    87 => "unknown_87",
    88 => "beacon",
    89 => "horn",
    90 => "beach",
    91 => "buoy_white",
    92 => "wrecker",
    93 => "navaid_amber",
    94 => "navaid_black",
    95 => "navaid_blue",
    96 => "navaid_greenwhite",
    97 => "navaid_green",
    98 => "navaid_greenred",
    99 => "navaid_orange",
    100 => "navaid_redgreen",
    101 => "navaid_redwhite",
    102 => "navaid_red",
    103 => "navaid_violet",
    104 => "navaid_white",
    105 => "navaid_whitegreen",
    106 => "navaid_whitered",
    107 => "unknown_107",
    108 => "bell",
    109 => "block_green",
    110 => "block_red",
    111 => "food_source",
    112 => "unknown_112",
    113 => "unknown_113",
    114 => "unknown_114",
    115 => "unknown_115",
    116 => "flag_green",
    117 => "flag_red",
    118 => "pin_green",
    119 => "pin_red",
    120 => "atv",
    121 => "big_game",
    122 => "blind",
    123 => "blood_trail",
    124 => "cover",
    125 => "covey",
    126 => "unknown_126",
    127 => "furbearer",
    128 => "lodge",
    129 => "small_game",
    130 => "animal_tracks",
    131 => "treed_quarry",
    132 => "tree_stand",
    133 => "truck",
    134 => "upland_game",
    135 => "waterfowl",
    136 => "water_source",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_both_ways() {
        assert_eq!(FILE.name_of(4), Some("activity"));
        assert_eq!(FILE.name_of(8), None);
        assert_eq!(SLEEP_LEVEL.value_of("rem"), Some(4));
        assert_eq!(SLEEP_LEVEL.value_of("nap"), None);
    }

    #[test]
    fn values_are_sorted_and_distinct() {
        for table in [
            &FILE,
            &SPORT,
            &WEATHER_CONDITION,
            &EXERCISE_CATEGORY,
            &LOCATION_SYMBOL,
        ] {
            assert!(
                table.values.windows(2).all(|w| w[0].0 < w[1].0),
                "{} is out of order",
                table.name
            );
        }
    }

    #[test]
    fn gaps_have_no_name() {
        assert_eq!(WEATHER_CONDITION.name_of(3), Some("rain"));
        assert_eq!(WEATHER_CONDITION.name_of(9), None);
        assert_eq!(EXERCISE_CATEGORY.name_of(250), Some("unknown"));
        assert_eq!(LOCATION_SYMBOL.value_of("city_large"), Some(17));
    }
}
