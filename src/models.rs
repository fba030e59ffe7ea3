use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog;
use crate::timer::{PhaseSpec, TimerMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    Sad,
    Down,
    Neutral,
    Good,
    Great,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthData {
    pub signed_in: bool,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepEntry {
    pub id: u64,
    pub date: String,
    pub bedtime: String,
    pub wake_time: String,
    pub quality: u8,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: u64,
    pub date: String,
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub time: String,
    pub calories: u32,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: u64,
    pub date: String,
    pub weight_kg: f64,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StretchExercise {
    pub name: String,
    pub seconds: u32,
    pub difficulty: Difficulty,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StretchRoutine {
    pub id: u64,
    pub date: String,
    pub exercises: Vec<StretchExercise>,
    pub notes: String,
}

impl StretchRoutine {
    pub fn total_seconds(&self) -> u32 {
        self.exercises.iter().map(|exercise| exercise.seconds).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: u64,
    pub date: String,
    pub activity: String,
    pub minutes: u32,
    pub intensity: Intensity,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineExercise {
    pub id: String,
    pub name: String,
    pub seconds: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRoutine {
    pub id: String,
    pub name: String,
    pub exercises: Vec<RoutineExercise>,
}

impl WorkoutRoutine {
    pub fn progress_percent(&self) -> u32 {
        if self.exercises.is_empty() {
            return 0;
        }
        let completed = self
            .exercises
            .iter()
            .filter(|exercise| exercise.completed)
            .count();
        ((completed as f64 / self.exercises.len() as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub date: String,
    pub mood: String,
    pub activities: Vec<String>,
    pub thoughts: String,
    pub gratitude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppData {
    pub next_id: u64,
    pub auth: AuthData,
    pub moods: BTreeMap<String, MoodLevel>,
    pub water: BTreeMap<String, u32>,
    pub sleep: Vec<SleepEntry>,
    pub meals: Vec<MealEntry>,
    pub weights: Vec<WeightEntry>,
    pub stretching: Vec<StretchRoutine>,
    pub workouts: Vec<WorkoutEntry>,
    pub routines: Vec<WorkoutRoutine>,
    pub journal: Vec<JournalEntry>,
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            next_id: 1,
            auth: AuthData::default(),
            moods: BTreeMap::new(),
            water: BTreeMap::new(),
            sleep: Vec::new(),
            meals: Vec::new(),
            weights: Vec::new(),
            stretching: Vec::new(),
            workouts: Vec::new(),
            routines: catalog::default_routines(),
            journal: Vec::new(),
        }
    }
}

impl AppData {
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn find_routine(&self, routine_id: &str) -> Option<&WorkoutRoutine> {
        self.routines.iter().find(|routine| routine.id == routine_id)
    }

    pub fn find_routine_exercise_mut(
        &mut self,
        routine_id: &str,
        exercise_id: &str,
    ) -> Option<&mut RoutineExercise> {
        self.routines
            .iter_mut()
            .find(|routine| routine.id == routine_id)?
            .exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
    }
}

pub fn sleep_duration_minutes(bedtime: &str, wake_time: &str) -> Option<u32> {
    let bed = NaiveTime::parse_from_str(bedtime, "%H:%M").ok()?;
    let wake = NaiveTime::parse_from_str(wake_time, "%H:%M").ok()?;
    let mut minutes = (wake - bed).num_minutes();
    if minutes <= 0 {
        minutes += 24 * 60;
    }
    Some(minutes as u32)
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub date: Option<String>,
    pub mood: MoodLevel,
}

#[derive(Debug, Deserialize)]
pub struct WaterAddRequest {
    pub ml: u32,
}

#[derive(Debug, Deserialize)]
pub struct SleepRequest {
    pub date: Option<String>,
    pub bedtime: String,
    pub wake_time: String,
    pub quality: u8,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MealRequest {
    pub date: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub time: String,
    pub calories: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WeightRequest {
    pub date: Option<String>,
    pub weight_kg: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StretchExerciseRequest {
    pub name: String,
    pub seconds: u32,
    pub difficulty: Difficulty,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StretchRoutineRequest {
    pub date: Option<String>,
    pub exercises: Vec<StretchExerciseRequest>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutRequest {
    pub date: Option<String>,
    pub activity: String,
    pub minutes: u32,
    pub intensity: Intensity,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    pub date: Option<String>,
    pub mood: String,
    #[serde(default)]
    pub activities: Vec<String>,
    pub thoughts: String,
    #[serde(default)]
    pub gratitude: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BreathingStartRequest {
    pub pattern: Option<String>,
    pub phases: Option<Vec<PhaseSpec>>,
    pub mode: Option<TimerMode>,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub now: String,
}

#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub date: String,
    pub mood: Option<MoodLevel>,
    pub history: BTreeMap<String, MoodLevel>,
}

#[derive(Debug, Serialize)]
pub struct WaterResponse {
    pub date: String,
    pub ml: u32,
    pub goal_ml: u32,
    pub percent: u32,
    pub goal_met: bool,
    pub cups: Vec<catalog::CupSize>,
}

#[derive(Debug, Serialize)]
pub struct SleepEntryResponse {
    pub id: u64,
    pub date: String,
    pub bedtime: String,
    pub wake_time: String,
    pub quality: u8,
    pub notes: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct StretchRoutineResponse {
    pub id: u64,
    pub date: String,
    pub exercises: Vec<StretchExercise>,
    pub notes: String,
    pub total_seconds: u32,
}

#[derive(Debug, Serialize)]
pub struct RoutineResponse {
    pub id: String,
    pub name: String,
    pub exercises: Vec<RoutineExercise>,
    pub progress_percent: u32,
}

#[derive(Debug, Serialize)]
pub struct WeightProgress {
    pub start_kg: f64,
    pub current_kg: f64,
    pub change_kg: f64,
    pub percent_change: f64,
}

#[derive(Debug, Serialize)]
pub struct WeightListResponse {
    pub entries: Vec<WeightEntry>,
    pub progress: Option<WeightProgress>,
}

#[derive(Debug, Serialize)]
pub struct WaterDayPoint {
    pub date: String,
    pub ml: u32,
    pub goal_met: bool,
}

#[derive(Debug, Serialize)]
pub struct WaterStats {
    pub last_7_days: Vec<WaterDayPoint>,
    pub today_ml: u32,
    pub goal_ml: u32,
}

#[derive(Debug, Serialize)]
pub struct MealTypeTotal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub calories: u32,
}

#[derive(Debug, Serialize)]
pub struct MealStats {
    pub today_calories: u32,
    pub goal: u32,
    pub remaining: i64,
    pub by_type: Vec<MealTypeTotal>,
}

#[derive(Debug, Serialize)]
pub struct SleepStats {
    pub count: usize,
    pub avg_duration_minutes: f64,
    pub avg_quality: f64,
}

#[derive(Debug, Serialize)]
pub struct MoodDayPoint {
    pub date: String,
    pub mood: Option<MoodLevel>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub water: WaterStats,
    pub meals: MealStats,
    pub weight: Option<WeightProgress>,
    pub sleep: Option<SleepStats>,
    pub mood: Vec<MoodDayPoint>,
}
