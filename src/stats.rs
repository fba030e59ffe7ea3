use crate::catalog::{DAILY_CALORIE_GOAL, DAILY_WATER_GOAL_ML};
use crate::models::{
    AppData, MealStats, MealType, MealTypeTotal, MoodDayPoint, SleepStats, StatsResponse,
    WaterDayPoint, WaterStats, WeightEntry, WeightProgress, sleep_duration_minutes,
};
use chrono::{Duration, Local, NaiveDate};

const MEAL_TYPES: [MealType; 4] = [
    MealType::Breakfast,
    MealType::Lunch,
    MealType::Dinner,
    MealType::Snack,
];

pub fn build_stats(data: &AppData) -> StatsResponse {
    build_stats_at(Local::now().date_naive(), data)
}

pub fn build_stats_at(today: NaiveDate, data: &AppData) -> StatsResponse {
    let today_key = date_key(today);

    let mut last_7_days = Vec::with_capacity(7);
    let mut mood = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let key = date_key(date);
        let ml = data.water.get(&key).copied().unwrap_or(0);
        last_7_days.push(WaterDayPoint {
            date: key.clone(),
            ml,
            goal_met: ml >= DAILY_WATER_GOAL_ML,
        });
        mood.push(MoodDayPoint {
            date: key.clone(),
            mood: data.moods.get(&key).copied(),
        });
    }
    let today_ml = data.water.get(&today_key).copied().unwrap_or(0);

    let mut today_calories = 0u32;
    let mut by_type = Vec::with_capacity(MEAL_TYPES.len());
    for meal_type in MEAL_TYPES {
        let calories: u32 = data
            .meals
            .iter()
            .filter(|meal| meal.date == today_key && meal.meal_type == meal_type)
            .map(|meal| meal.calories)
            .sum();
        today_calories += calories;
        by_type.push(MealTypeTotal { meal_type, calories });
    }

    let sleep = if data.sleep.is_empty() {
        None
    } else {
        let recent: Vec<_> = data.sleep.iter().rev().take(7).collect();
        let count = recent.len();
        let minutes: u32 = recent
            .iter()
            .filter_map(|entry| sleep_duration_minutes(&entry.bedtime, &entry.wake_time))
            .sum();
        let quality: u32 = recent.iter().map(|entry| u32::from(entry.quality)).sum();
        Some(SleepStats {
            count: data.sleep.len(),
            avg_duration_minutes: f64::from(minutes) / count as f64,
            avg_quality: f64::from(quality) / count as f64,
        })
    };

    StatsResponse {
        water: WaterStats {
            last_7_days,
            today_ml,
            goal_ml: DAILY_WATER_GOAL_ML,
        },
        meals: MealStats {
            today_calories,
            goal: DAILY_CALORIE_GOAL,
            remaining: i64::from(DAILY_CALORIE_GOAL) - i64::from(today_calories),
            by_type,
        },
        weight: weight_progress(&data.weights),
        sleep,
        mood,
    }
}

/// First-to-last change ordered by date. Ties keep insertion order, so two
/// entries logged the same day compare in the order they were added.
pub fn weight_progress(entries: &[WeightEntry]) -> Option<WeightProgress> {
    if entries.len() < 2 {
        return None;
    }
    let mut ordered: Vec<&WeightEntry> = entries.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date));
    let start = ordered.first()?.weight_kg;
    let current = ordered.last()?.weight_kg;
    let change = current - start;
    let percent_change = if start == 0.0 {
        0.0
    } else {
        (change / start * 1000.0).round() / 10.0
    };
    Some(WeightProgress {
        start_kg: start,
        current_kg: current,
        change_kg: change,
        percent_change,
    })
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealEntry, MoodLevel, SleepEntry};

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn weight(id: u64, date: &str, kg: f64) -> WeightEntry {
        WeightEntry {
            id,
            date: date.to_string(),
            weight_kg: kg,
            notes: String::new(),
        }
    }

    #[test]
    fn water_series_covers_the_last_seven_days_in_order() {
        let mut data = AppData::default();
        let today = day(2026, 3, 10);
        data.water.insert("2026-03-10".to_string(), 1500);
        data.water.insert("2026-03-08".to_string(), 2250);

        let stats = build_stats_at(today, &data);
        assert_eq!(stats.water.last_7_days.len(), 7);
        assert_eq!(stats.water.last_7_days[0].date, "2026-03-04");
        assert_eq!(stats.water.last_7_days[6].date, "2026-03-10");
        assert_eq!(stats.water.today_ml, 1500);
        assert!(!stats.water.last_7_days[6].goal_met);

        let met_day = &stats.water.last_7_days[4];
        assert_eq!(met_day.date, "2026-03-08");
        assert_eq!(met_day.ml, 2250);
        assert!(met_day.goal_met);
    }

    #[test]
    fn meal_stats_only_count_todays_entries() {
        let mut data = AppData::default();
        let today = day(2026, 3, 10);
        let meal = |date: &str, meal_type, calories| MealEntry {
            id: 0,
            date: date.to_string(),
            name: "meal".to_string(),
            meal_type,
            time: "08:00".to_string(),
            calories,
            notes: String::new(),
        };
        data.meals.push(meal("2026-03-10", MealType::Breakfast, 400));
        data.meals.push(meal("2026-03-10", MealType::Snack, 150));
        data.meals.push(meal("2026-03-09", MealType::Dinner, 900));

        let stats = build_stats_at(today, &data);
        assert_eq!(stats.meals.today_calories, 550);
        assert_eq!(stats.meals.remaining, i64::from(DAILY_CALORIE_GOAL) - 550);
        assert_eq!(stats.meals.by_type.len(), 4);
        assert_eq!(stats.meals.by_type[0].calories, 400);
        assert_eq!(stats.meals.by_type[2].calories, 0);
        assert_eq!(stats.meals.by_type[3].calories, 150);
    }

    #[test]
    fn weight_progress_orders_by_date_not_insertion() {
        let entries = vec![
            weight(2, "2026-02-01", 78.0),
            weight(1, "2026-01-01", 80.0),
            weight(3, "2026-03-01", 76.0),
        ];
        let progress = weight_progress(&entries).expect("two or more entries");
        assert_eq!(progress.start_kg, 80.0);
        assert_eq!(progress.current_kg, 76.0);
        assert_eq!(progress.change_kg, -4.0);
        assert_eq!(progress.percent_change, -5.0);
    }

    #[test]
    fn weight_progress_rounds_percent_to_one_decimal() {
        let entries = vec![weight(1, "2026-01-01", 90.0), weight(2, "2026-02-01", 87.0)];
        let progress = weight_progress(&entries).expect("progress");
        assert_eq!(progress.percent_change, -3.3);
    }

    #[test]
    fn weight_progress_needs_two_entries() {
        assert!(weight_progress(&[]).is_none());
        assert!(weight_progress(&[weight(1, "2026-01-01", 80.0)]).is_none());
    }

    #[test]
    fn sleep_stats_average_the_most_recent_entries() {
        let mut data = AppData::default();
        for offset in 0..9 {
            data.sleep.push(SleepEntry {
                id: offset,
                date: format!("2026-03-{:02}", offset + 1),
                bedtime: "23:00".to_string(),
                wake_time: if offset < 7 { "07:00" } else { "05:00" }.to_string(),
                quality: if offset % 2 == 0 { 4 } else { 2 },
                notes: String::new(),
            });
        }

        let stats = build_stats_at(day(2026, 3, 10), &data);
        let sleep = stats.sleep.expect("sleep stats");
        assert_eq!(sleep.count, 9);
        // The last seven entries are offsets 2..=8, two of which wake at 05:00.
        let expected_minutes = f64::from(5 * 480 + 2 * 360) / 7.0;
        assert!((sleep.avg_duration_minutes - expected_minutes).abs() < 1e-9);
        assert!(sleep.avg_quality > 2.0 && sleep.avg_quality < 4.0);
    }

    #[test]
    fn mood_series_reports_gaps_as_none() {
        let mut data = AppData::default();
        data.moods.insert("2026-03-09".to_string(), MoodLevel::Good);

        let stats = build_stats_at(day(2026, 3, 10), &data);
        assert_eq!(stats.mood.len(), 7);
        assert_eq!(stats.mood[5].mood, Some(MoodLevel::Good));
        assert_eq!(stats.mood[6].mood, None);
    }

    #[test]
    fn empty_data_yields_empty_sections() {
        let stats = build_stats_at(day(2026, 3, 10), &AppData::default());
        assert!(stats.weight.is_none());
        assert!(stats.sleep.is_none());
        assert_eq!(stats.meals.today_calories, 0);
        assert_eq!(stats.meals.remaining, i64::from(DAILY_CALORIE_GOAL));
    }
}
