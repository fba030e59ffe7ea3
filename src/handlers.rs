use crate::catalog::{self, CUP_SIZES, DAILY_WATER_GOAL_ML};
use crate::errors::AppError;
use crate::models::{
    AppData, AuthData, BreathingStartRequest, HealthResponse, JournalEntry, JournalRequest,
    LoginRequest, MealEntry, MealRequest, MoodRequest, MoodResponse, RoutineResponse,
    ServiceInfo, SignupRequest, SleepEntry, SleepEntryResponse, SleepRequest, StatsResponse,
    StretchExercise, StretchRoutine, StretchRoutineRequest, StretchRoutineResponse, UserProfile,
    WaterAddRequest, WaterResponse, WeightEntry, WeightListResponse, WeightRequest, WorkoutEntry,
    WorkoutRequest, WorkoutRoutine, sleep_duration_minutes,
};
use crate::session::{ActiveSession, SessionKind, SessionSnapshot, SessionStateResponse};
use crate::state::AppState;
use crate::stats;
use crate::storage::persist_data;
use crate::timer::{PhaseSequence, PhaseSpec, PhaseTimer, TimerMode};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;

pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "health_tracker",
        status: "ok",
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        now: Local::now().to_rfc3339(),
    })
}

// --- auth -------------------------------------------------------------------
//
// Demo plumbing, not access control: any non-empty credentials flip a stored
// signed-in flag. Passwords are never stored or verified.

pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AuthData>, AppError> {
    let name = required_text(&payload.name, "name")?;
    let email = required_text(&payload.email, "email")?;
    required_text(&payload.password, "password")?;

    let mut data = state.data.lock().await;
    data.auth.signed_in = true;
    data.auth.profile = Some(UserProfile {
        name: Some(name),
        email,
    });
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.auth.clone()))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthData>, AppError> {
    let email = required_text(&payload.email, "email")?;
    required_text(&payload.password, "password")?;

    let mut data = state.data.lock().await;
    let name = data
        .auth
        .profile
        .as_ref()
        .filter(|profile| profile.email == email)
        .and_then(|profile| profile.name.clone());
    data.auth.signed_in = true;
    data.auth.profile = Some(UserProfile { name, email });
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.auth.clone()))
}

pub async fn logout(State(state): State<AppState>) -> Result<Json<AuthData>, AppError> {
    let mut data = state.data.lock().await;
    data.auth.signed_in = false;
    data.auth.profile = None;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.auth.clone()))
}

pub async fn auth_session(State(state): State<AppState>) -> Json<AuthData> {
    let data = state.data.lock().await;
    Json(data.auth.clone())
}

// --- timer sessions ---------------------------------------------------------

pub async fn breathing_patterns() -> Json<Vec<catalog::BreathingPattern>> {
    Json(catalog::BREATHING_PATTERNS.to_vec())
}

pub async fn breathing_start(
    State(state): State<AppState>,
    Json(payload): Json<BreathingStartRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    require_signed_in(&state).await?;
    let (sequence, pattern, mode) = resolve_breathing_sequence(payload)?;

    let mut guard = state.session.lock().await;
    let active = ActiveSession::new(
        SessionKind::Breathing { pattern },
        PhaseTimer::start(sequence, mode),
    );
    let snapshot = active.snapshot();
    *guard = Some(active);
    Ok(Json(snapshot))
}

/// Swaps the pattern on a live breathing session. With no breathing session
/// mounted it installs a fresh paused one instead, so the caller always ends
/// up bound to the requested pattern.
pub async fn breathing_change_pattern(
    State(state): State<AppState>,
    Json(payload): Json<BreathingStartRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    require_signed_in(&state).await?;
    let (sequence, pattern, mode) = resolve_breathing_sequence(payload)?;

    let mut guard = state.session.lock().await;
    match guard.as_mut() {
        Some(active) if matches!(active.kind, SessionKind::Breathing { .. }) => {
            active.timer.change_sequence(sequence);
            active.kind = SessionKind::Breathing { pattern };
            Ok(Json(active.snapshot()))
        }
        _ => {
            let mut timer = PhaseTimer::start(sequence, mode);
            timer.pause();
            let active = ActiveSession::new(SessionKind::Breathing { pattern }, timer);
            let snapshot = active.snapshot();
            *guard = Some(active);
            Ok(Json(snapshot))
        }
    }
}

pub async fn guided_stretch_start(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    require_signed_in(&state).await?;
    let sequence = catalog::guided_stretch_sequence()?;

    let mut guard = state.session.lock().await;
    let active = ActiveSession::new(
        SessionKind::Stretch,
        PhaseTimer::start(sequence, TimerMode::SinglePass),
    );
    let snapshot = active.snapshot();
    *guard = Some(active);
    Ok(Json(snapshot))
}

pub async fn session_state(
    State(state): State<AppState>,
) -> Result<Json<SessionStateResponse>, AppError> {
    require_signed_in(&state).await?;
    let guard = state.session.lock().await;
    Ok(Json(SessionStateResponse {
        active: guard.is_some(),
        session: guard.as_ref().map(ActiveSession::snapshot),
    }))
}

pub async fn session_pause(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    require_signed_in(&state).await?;
    let mut guard = state.session.lock().await;
    let active = guard.as_mut().ok_or_else(no_active_session)?;
    active.timer.pause();
    Ok(Json(active.snapshot()))
}

pub async fn session_resume(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    require_signed_in(&state).await?;
    let mut guard = state.session.lock().await;
    let active = guard.as_mut().ok_or_else(no_active_session)?;
    active.timer.resume();
    Ok(Json(active.snapshot()))
}

pub async fn session_reset(
    State(state): State<AppState>,
) -> Result<Json<SessionSnapshot>, AppError> {
    require_signed_in(&state).await?;
    let mut guard = state.session.lock().await;
    let active = guard.as_mut().ok_or_else(no_active_session)?;
    active.timer.reset();
    Ok(Json(active.snapshot()))
}

pub async fn session_clear(
    State(state): State<AppState>,
) -> Result<Json<SessionStateResponse>, AppError> {
    require_signed_in(&state).await?;
    let mut guard = state.session.lock().await;
    guard.take().ok_or_else(no_active_session)?;
    Ok(Json(SessionStateResponse {
        active: false,
        session: None,
    }))
}

// --- workout routines -------------------------------------------------------

pub async fn list_routines(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoutineResponse>>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    Ok(Json(data.routines.iter().map(routine_response).collect()))
}

pub async fn toggle_routine_exercise(
    State(state): State<AppState>,
    Path((routine_id, exercise_id)): Path<(String, String)>,
) -> Result<Json<RoutineResponse>, AppError> {
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    let exercise = data
        .find_routine_exercise_mut(&routine_id, &exercise_id)
        .ok_or_else(|| AppError::not_found("unknown routine or exercise"))?;
    exercise.completed = !exercise.completed;
    persist_data(&state.data_path, &data).await?;

    let routine = data
        .find_routine(&routine_id)
        .ok_or_else(|| AppError::not_found("unknown routine"))?;
    Ok(Json(routine_response(routine)))
}

pub async fn start_routine_exercise(
    State(state): State<AppState>,
    Path((routine_id, exercise_id)): Path<(String, String)>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let sequence = {
        let data = state.data.lock().await;
        require_signed_in_data(&data)?;
        let exercise = data
            .find_routine(&routine_id)
            .and_then(|routine| {
                routine
                    .exercises
                    .iter()
                    .find(|exercise| exercise.id == exercise_id)
            })
            .ok_or_else(|| AppError::not_found("unknown routine or exercise"))?;
        PhaseSequence::new(vec![PhaseSpec::new(exercise.name.clone(), exercise.seconds)])?
    };

    let mut guard = state.session.lock().await;
    let active = ActiveSession::new(
        SessionKind::Exercise {
            routine: routine_id,
            exercise: exercise_id,
        },
        PhaseTimer::start(sequence, TimerMode::SinglePass),
    );
    let snapshot = active.snapshot();
    *guard = Some(active);
    Ok(Json(snapshot))
}

// --- tracker stores ---------------------------------------------------------

pub async fn get_mood(State(state): State<AppState>) -> Result<Json<MoodResponse>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    Ok(Json(mood_response(today_string(), &data)))
}

pub async fn log_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<MoodResponse>, AppError> {
    let date = normalized_date(payload.date)?;
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    data.moods.insert(date.clone(), payload.mood);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(mood_response(date, &data)))
}

pub async fn get_water(State(state): State<AppState>) -> Result<Json<WaterResponse>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    let date = today_string();
    let ml = data.water.get(&date).copied().unwrap_or(0);
    Ok(Json(water_response(date, ml)))
}

pub async fn add_water(
    State(state): State<AppState>,
    Json(payload): Json<WaterAddRequest>,
) -> Result<Json<WaterResponse>, AppError> {
    if payload.ml == 0 {
        return Err(AppError::bad_request("ml must be positive"));
    }
    let date = today_string();
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    let entry = data.water.entry(date.clone()).or_insert(0);
    *entry = entry.saturating_add(payload.ml);
    let ml = *entry;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(water_response(date, ml)))
}

pub async fn reset_water(State(state): State<AppState>) -> Result<Json<WaterResponse>, AppError> {
    let date = today_string();
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    data.water.insert(date.clone(), 0);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(water_response(date, 0)))
}

pub async fn list_sleep(
    State(state): State<AppState>,
) -> Result<Json<Vec<SleepEntryResponse>>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    Ok(Json(data.sleep.iter().map(sleep_response).collect()))
}

pub async fn add_sleep(
    State(state): State<AppState>,
    Json(payload): Json<SleepRequest>,
) -> Result<Json<SleepEntryResponse>, AppError> {
    let date = normalized_date(payload.date)?;
    if sleep_duration_minutes(&payload.bedtime, &payload.wake_time).is_none() {
        return Err(AppError::bad_request("bedtime and wake_time must be HH:MM"));
    }
    if !(1..=5).contains(&payload.quality) {
        return Err(AppError::bad_request("quality must be between 1 and 5"));
    }

    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    let entry = SleepEntry {
        id: data.allocate_id(),
        date,
        bedtime: payload.bedtime,
        wake_time: payload.wake_time,
        quality: payload.quality,
        notes: payload.notes.unwrap_or_default(),
    };
    let response = sleep_response(&entry);
    data.sleep.push(entry);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(response))
}

pub async fn delete_sleep(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<SleepEntryResponse>>, AppError> {
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    remove_by_id(&mut data.sleep, id, |entry| entry.id, "sleep entry")?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.sleep.iter().map(sleep_response).collect()))
}

pub async fn list_meals(State(state): State<AppState>) -> Result<Json<Vec<MealEntry>>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    Ok(Json(data.meals.clone()))
}

pub async fn add_meal(
    State(state): State<AppState>,
    Json(payload): Json<MealRequest>,
) -> Result<Json<MealEntry>, AppError> {
    let date = normalized_date(payload.date)?;
    let name = required_text(&payload.name, "name")?;
    let time = required_text(&payload.time, "time")?;
    if payload.calories == 0 {
        return Err(AppError::bad_request("calories must be positive"));
    }

    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    let entry = MealEntry {
        id: data.allocate_id(),
        date,
        name,
        meal_type: payload.meal_type,
        time,
        calories: payload.calories,
        notes: payload.notes.unwrap_or_default(),
    };
    data.meals.push(entry.clone());
    persist_data(&state.data_path, &data).await?;
    Ok(Json(entry))
}

pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<MealEntry>>, AppError> {
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    remove_by_id(&mut data.meals, id, |entry| entry.id, "meal")?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.meals.clone()))
}

pub async fn list_weight(
    State(state): State<AppState>,
) -> Result<Json<WeightListResponse>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    Ok(Json(weight_list_response(&data)))
}

pub async fn add_weight(
    State(state): State<AppState>,
    Json(payload): Json<WeightRequest>,
) -> Result<Json<WeightListResponse>, AppError> {
    let date = normalized_date(payload.date)?;
    if !payload.weight_kg.is_finite() || payload.weight_kg <= 0.0 {
        return Err(AppError::bad_request("weight_kg must be positive"));
    }

    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    let entry = WeightEntry {
        id: data.allocate_id(),
        date,
        weight_kg: payload.weight_kg,
        notes: payload.notes.unwrap_or_default(),
    };
    data.weights.push(entry);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(weight_list_response(&data)))
}

pub async fn delete_weight(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<WeightListResponse>, AppError> {
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    remove_by_id(&mut data.weights, id, |entry| entry.id, "weight entry")?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(weight_list_response(&data)))
}

pub async fn list_stretching(
    State(state): State<AppState>,
) -> Result<Json<Vec<StretchRoutineResponse>>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    Ok(Json(data.stretching.iter().map(stretch_response).collect()))
}

pub async fn add_stretching(
    State(state): State<AppState>,
    Json(payload): Json<StretchRoutineRequest>,
) -> Result<Json<StretchRoutineResponse>, AppError> {
    let date = normalized_date(payload.date)?;
    if payload.exercises.is_empty() {
        return Err(AppError::bad_request("at least one exercise is required"));
    }
    let mut exercises = Vec::with_capacity(payload.exercises.len());
    for exercise in payload.exercises {
        let name = required_text(&exercise.name, "exercise name")?;
        if exercise.seconds == 0 {
            return Err(AppError::bad_request("exercise seconds must be positive"));
        }
        exercises.push(StretchExercise {
            name,
            seconds: exercise.seconds,
            difficulty: exercise.difficulty,
            notes: exercise.notes.unwrap_or_default(),
        });
    }

    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    let routine = StretchRoutine {
        id: data.allocate_id(),
        date,
        exercises,
        notes: payload.notes.unwrap_or_default(),
    };
    let response = stretch_response(&routine);
    data.stretching.push(routine);
    persist_data(&state.data_path, &data).await?;
    Ok(Json(response))
}

pub async fn delete_stretching(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<StretchRoutineResponse>>, AppError> {
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    remove_by_id(&mut data.stretching, id, |routine| routine.id, "stretch routine")?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.stretching.iter().map(stretch_response).collect()))
}

pub async fn list_workouts(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutEntry>>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    Ok(Json(data.workouts.clone()))
}

pub async fn add_workout(
    State(state): State<AppState>,
    Json(payload): Json<WorkoutRequest>,
) -> Result<Json<WorkoutEntry>, AppError> {
    let date = normalized_date(payload.date)?;
    let activity = required_text(&payload.activity, "activity")?;
    if payload.minutes == 0 {
        return Err(AppError::bad_request("minutes must be positive"));
    }

    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    let entry = WorkoutEntry {
        id: data.allocate_id(),
        date,
        activity,
        minutes: payload.minutes,
        intensity: payload.intensity,
        notes: payload.notes.unwrap_or_default(),
    };
    data.workouts.push(entry.clone());
    persist_data(&state.data_path, &data).await?;
    Ok(Json(entry))
}

pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<WorkoutEntry>>, AppError> {
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    remove_by_id(&mut data.workouts, id, |entry| entry.id, "workout")?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.workouts.clone()))
}

pub async fn list_journal(
    State(state): State<AppState>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    Ok(Json(data.journal.clone()))
}

pub async fn add_journal(
    State(state): State<AppState>,
    Json(payload): Json<JournalRequest>,
) -> Result<Json<JournalEntry>, AppError> {
    let date = normalized_date(payload.date)?;
    let mood = required_text(&payload.mood, "mood")?;
    let thoughts = required_text(&payload.thoughts, "thoughts")?;

    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    let entry = JournalEntry {
        id: data.allocate_id(),
        date,
        mood,
        activities: payload.activities,
        thoughts,
        gratitude: payload.gratitude,
    };
    data.journal.push(entry.clone());
    persist_data(&state.data_path, &data).await?;
    Ok(Json(entry))
}

pub async fn delete_journal(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<JournalEntry>>, AppError> {
    let mut data = state.data.lock().await;
    require_signed_in_data(&data)?;
    remove_by_id(&mut data.journal, id, |entry| entry.id, "journal entry")?;
    persist_data(&state.data_path, &data).await?;
    Ok(Json(data.journal.clone()))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)?;
    Ok(Json(stats::build_stats(&data)))
}

// --- helpers ----------------------------------------------------------------

fn require_signed_in_data(data: &AppData) -> Result<(), AppError> {
    if data.auth.signed_in {
        Ok(())
    } else {
        Err(AppError::unauthorized("sign in required"))
    }
}

/// Auth check for session handlers, which must not hold the data lock while
/// they take the session lock.
async fn require_signed_in(state: &AppState) -> Result<(), AppError> {
    let data = state.data.lock().await;
    require_signed_in_data(&data)
}

fn no_active_session() -> AppError {
    AppError::not_found("no active session")
}

fn resolve_breathing_sequence(
    payload: BreathingStartRequest,
) -> Result<(PhaseSequence, Option<String>, TimerMode), AppError> {
    let mode = payload.mode.unwrap_or(TimerMode::Loop);
    if let Some(id) = payload.pattern {
        let pattern = catalog::find_pattern(&id)
            .ok_or_else(|| AppError::bad_request(format!("unknown breathing pattern '{id}'")))?;
        Ok((pattern.phase_sequence()?, Some(id), mode))
    } else if let Some(phases) = payload.phases {
        Ok((PhaseSequence::new(phases)?, None, mode))
    } else {
        Err(AppError::bad_request("either pattern or phases is required"))
    }
}

fn routine_response(routine: &WorkoutRoutine) -> RoutineResponse {
    RoutineResponse {
        id: routine.id.clone(),
        name: routine.name.clone(),
        exercises: routine.exercises.clone(),
        progress_percent: routine.progress_percent(),
    }
}

fn mood_response(date: String, data: &AppData) -> MoodResponse {
    MoodResponse {
        mood: data.moods.get(&date).copied(),
        date,
        history: data.moods.clone(),
    }
}

fn water_response(date: String, ml: u32) -> WaterResponse {
    let percent = ((f64::from(ml) / f64::from(DAILY_WATER_GOAL_ML)) * 100.0)
        .round()
        .min(100.0) as u32;
    WaterResponse {
        date,
        ml,
        goal_ml: DAILY_WATER_GOAL_ML,
        percent,
        goal_met: ml >= DAILY_WATER_GOAL_ML,
        cups: CUP_SIZES.to_vec(),
    }
}

fn sleep_response(entry: &SleepEntry) -> SleepEntryResponse {
    SleepEntryResponse {
        id: entry.id,
        date: entry.date.clone(),
        bedtime: entry.bedtime.clone(),
        wake_time: entry.wake_time.clone(),
        quality: entry.quality,
        notes: entry.notes.clone(),
        duration_minutes: sleep_duration_minutes(&entry.bedtime, &entry.wake_time).unwrap_or(0),
    }
}

fn stretch_response(routine: &StretchRoutine) -> StretchRoutineResponse {
    StretchRoutineResponse {
        id: routine.id,
        date: routine.date.clone(),
        exercises: routine.exercises.clone(),
        notes: routine.notes.clone(),
        total_seconds: routine.total_seconds(),
    }
}

fn weight_list_response(data: &AppData) -> WeightListResponse {
    WeightListResponse {
        entries: data.weights.clone(),
        progress: stats::weight_progress(&data.weights),
    }
}

fn remove_by_id<T>(
    entries: &mut Vec<T>,
    id: u64,
    key: impl Fn(&T) -> u64,
    what: &str,
) -> Result<(), AppError> {
    let index = entries
        .iter()
        .position(|entry| key(entry) == id)
        .ok_or_else(|| AppError::not_found(format!("unknown {what} id {id}")))?;
    entries.remove(index);
    info!("deleted {what} {id}");
    Ok(())
}

fn required_text(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn normalized_date(input: Option<String>) -> Result<String, AppError> {
    match input {
        Some(raw) => {
            let trimmed = raw.trim();
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?;
            Ok(trimmed.to_string())
        }
        None => Ok(today_string()),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
