use super::super::answers::AnswerSet;
use super::super::questions::QuestionKey;

type TipBranch = fn(&str) -> &'static [&'static str];

/// Branch precedence. Earlier branches win when the list is truncated.
const TIP_BRANCHES: [(QuestionKey, TipBranch); 6] = [
    (QuestionKey::FitnessLevel, fitness_level_tips),
    (QuestionKey::PrimaryGoal, primary_goal_tips),
    (QuestionKey::TrainingStyle, training_style_tips),
    (QuestionKey::DaysPerWeek, days_per_week_tips),
    (QuestionKey::Motivation, motivation_tips),
    (QuestionKey::Timeline, timeline_tips),
];

fn fitness_level_tips(level: &str) -> &'static [&'static str] {
    match level {
        "beginner" => &[
            "Start with 2-3 workouts per week and gradually increase frequency",
            "Focus on proper form over intensity to prevent injury",
            "Include rest days for recovery and adaptation",
        ],
        "intermediate" => &[
            "Gradually increase the challenge of your workouts to keep making progress",
            "Add variety to prevent boredom and maintain motivation",
            "Keep track of your workouts to monitor progress",
        ],
        "advanced" => &[
            "Plan your training in cycles for long-term improvement",
            "Focus on recovery and rest between intense workouts",
            "Consider working with a trainer for advanced programming",
        ],
        _ => &[],
    }
}

fn primary_goal_tips(goal: &str) -> &'static [&'static str] {
    match goal {
        "weight_loss" => &[
            "Combine cardio and strength training to help you feel stronger and healthier",
            "Focus on building healthy habits that you can maintain long-term",
            "Stay consistent with your exercise routine",
        ],
        "muscle_gain" => &[
            "Focus on exercises that work multiple muscle groups at once",
            "Give your muscles time to rest between workouts",
            "Allow 48-72 hours between training the same muscle groups",
        ],
        "endurance" => &[
            "Include both steady cardio and interval training",
            "Gradually increase duration and intensity over time",
            "Focus on proper breathing and pacing strategies",
        ],
        "flexibility" => &[
            "Practice daily stretching, even for just 10-15 minutes",
            "Include gentle warm-ups before workouts",
            "Consider yoga or Pilates classes for structured practice",
        ],
        _ => &[],
    }
}

fn training_style_tips(style: &str) -> &'static [&'static str] {
    match style {
        "coach_led" => &[
            "Book classes in advance to secure your spot",
            "Try different instructors to find your preferred teaching style",
            "Arrive early to set up and introduce yourself to the instructor",
        ],
        "gym_alone" => &[
            "Create a structured workout plan to maximize your time",
            "Learn proper form for exercises to prevent injury",
            "Consider working with a trainer occasionally for technique check-ins",
        ],
        "mix_both" => &[
            "Use classes for motivation and solo training for specific goals",
            "Schedule classes for days when you need extra motivation",
            "Balance structured classes with flexible solo sessions",
        ],
        _ => &[],
    }
}

fn days_per_week_tips(days: &str) -> &'static [&'static str] {
    match days {
        "1-2" => &[
            "Aim for at least 3 sessions per week for optimal health benefits",
            "Focus on full-body workouts that work multiple muscle groups",
            "Make each session count with exercises that work several areas at once",
            "Consider longer sessions (60-90 minutes) since you have fewer days",
        ],
        "3-4" => &[
            "Create a balanced weekly schedule with rest days between sessions",
            "Alternate between upper body, lower body, and full-body workouts",
            "Include at least one cardio-focused session per week",
        ],
        "5+" => &[
            "Plan recovery days and avoid working the same muscle groups back-to-back",
            "Include variety to prevent burnout and overuse injuries",
            "Consider gentle activities on lighter training days",
        ],
        _ => &[],
    }
}

fn motivation_tips(motivation: &str) -> &'static [&'static str] {
    match motivation {
        "health" => &[
            "Focus on how exercise makes you feel, not just appearance",
            "Track health metrics like energy levels and sleep quality",
            "Include stress-reducing activities like yoga or meditation",
        ],
        "appearance" => &[
            "Take progress photos and measurements regularly",
            "Focus on both strength training and cardio for overall body health",
            "Be patient - visible changes take 4-8 weeks",
        ],
        "performance" => &[
            "Set specific, measurable goals and track progress",
            "Include sport-specific training if applicable",
            "Focus on gradually increasing challenge and skill development",
        ],
        "stress_relief" => &[
            "Choose activities you genuinely enjoy",
            "Include mindful movement practices like yoga or tai chi",
            "Use exercise as a form of active meditation",
        ],
        _ => &[],
    }
}

fn timeline_tips(timeline: &str) -> &'static [&'static str] {
    match timeline {
        "1_month" => &[
            "Focus on building consistent habits and proper form",
            "Expect initial improvements in energy and mood",
            "Don't get discouraged - visible changes take longer",
        ],
        "1_year" => &[
            "Develop a sustainable long-term approach",
            "Plan for different phases of training throughout the year",
            "Focus on lifestyle integration, not just short-term goals",
        ],
        _ => &[],
    }
}

/// Every tip the answers unlock, in branch precedence order.
pub(crate) fn collect_tips(answers: &AnswerSet) -> Vec<&'static str> {
    let mut tips = Vec::new();
    for (key, branch) in TIP_BRANCHES {
        if let Some(answer) = answers.single(key) {
            tips.extend_from_slice(branch(answer));
        }
    }
    tips
}

pub(crate) fn prioritized_tips(answers: &AnswerSet, limit: usize) -> Vec<&'static str> {
    let mut tips = collect_tips(answers);
    tips.truncate(limit);
    tips
}
