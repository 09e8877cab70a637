use crate::utils::{format_date, format_number};
use ideas::{ChannelStats, IdeaId, Priority, Status, VideoIdea};
use yew::prelude::*;

pub fn priority_badge_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "bg-red-100 text-red-800 border-red-300",
        Priority::Medium => "bg-yellow-100 text-yellow-800 border-yellow-300",
        Priority::Low => "bg-green-100 text-green-800 border-green-300",
    }
}

pub fn status_badge_class(status: Status) -> &'static str {
    match status {
        Status::Idea => "bg-gray-100 text-gray-800 border-gray-300",
        Status::Scripting => "bg-blue-100 text-blue-800 border-blue-300",
        Status::Filming => "bg-purple-100 text-purple-800 border-purple-300",
        Status::Editing => "bg-orange-100 text-orange-800 border-orange-300",
        Status::Scheduled => "bg-teal-100 text-teal-800 border-teal-300",
        Status::Published => "bg-green-100 text-green-800 border-green-300",
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="flex justify-between items-center bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                <span>{ msg }</span>
                <button onclick={props.on_dismiss.clone()} class="ml-4 font-bold hover:text-red-900">
                    {"×"}
                </button>
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: &'static str,
    value: String,
    border: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("bg-white", "rounded-lg", "shadow-md", "p-6", "border-l-4", props.border)}>
            <p class="text-gray-600 text-sm">{props.label}</p>
            <p class="text-2xl font-bold text-gray-800">{&props.value}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
    pub stats: ChannelStats,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    let stats = &props.stats;
    html! {
        <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-8">
            <StatCard label="Subscribers" value={format_number(stats.subscribers)} border="border-red-500" />
            <StatCard label="Total Views" value={format_number(stats.total_views)} border="border-blue-500" />
            <StatCard label="Total Videos" value={stats.total_videos.to_string()} border="border-green-500" />
            <StatCard label="Avg Views/Video" value={format_number(stats.avg_views_per_video)} border="border-purple-500" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct IdeaCardProps {
    pub idea: VideoIdea,
    pub on_edit: Callback<IdeaId>,
    pub on_delete: Callback<IdeaId>,
}

#[function_component(IdeaCard)]
pub fn idea_card(props: &IdeaCardProps) -> Html {
    let idea = &props.idea;

    let on_edit = {
        let id = idea.id.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
    };
    let on_delete = {
        let id = idea.id.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <div class="bg-white rounded-lg shadow-md p-6 hover:shadow-lg transition-shadow">
            <div class="flex justify-between items-start mb-3">
                <div class="flex-1">
                    <h3 class="text-xl font-semibold text-gray-800 mb-2">{&idea.title}</h3>
                    <p class="text-gray-600 mb-3">{&idea.description}</p>
                    <div class="flex flex-wrap gap-2">
                        <span class="px-3 py-1 rounded-full text-xs font-medium bg-indigo-100 text-indigo-800 border border-indigo-300">
                            {idea.category.label()}
                        </span>
                        <span class={classes!("px-3", "py-1", "rounded-full", "text-xs", "font-medium", "border", priority_badge_class(idea.priority))}>
                            {idea.priority.key().to_uppercase()}
                        </span>
                        <span class={classes!("px-3", "py-1", "rounded-full", "text-xs", "font-medium", "border", status_badge_class(idea.status))}>
                            {idea.status.key().to_uppercase()}
                        </span>
                    </div>
                </div>
                <div class="flex gap-2 ml-4">
                    <button onclick={on_edit} class="p-2 text-blue-600 hover:bg-blue-50 rounded-lg transition-colors">
                        {"Edit"}
                    </button>
                    <button onclick={on_delete} class="p-2 text-red-600 hover:bg-red-50 rounded-lg transition-colors">
                        {"Delete"}
                    </button>
                </div>
            </div>
            <div class="text-xs text-gray-400 mt-2">
                {format!("Created: {}", format_date(&idea.created_at))}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct IdeaListProps {
    pub ideas: Vec<VideoIdea>,
    pub on_edit: Callback<IdeaId>,
    pub on_delete: Callback<IdeaId>,
}

#[function_component(IdeaList)]
pub fn idea_list(props: &IdeaListProps) -> Html {
    html! {
        <div class="space-y-4">
            <h2 class="text-2xl font-semibold text-gray-800">
                {format!("Video Ideas ({})", props.ideas.len())}
            </h2>
            {
                if props.ideas.is_empty() {
                    html! {
                        <div class="bg-white rounded-lg shadow-md p-12 text-center">
                            <p class="text-gray-500 text-lg">
                                {"No video ideas yet. Start by adding your first idea!"}
                            </p>
                        </div>
                    }
                } else {
                    props.ideas.iter().map(|idea| {
                        html! {
                            <IdeaCard
                                key={idea.id.clone()}
                                idea={idea.clone()}
                                on_edit={props.on_edit.clone()}
                                on_delete={props.on_delete.clone()}
                            />
                        }
                    }).collect::<Html>()
                }
            }
        </div>
    }
}
