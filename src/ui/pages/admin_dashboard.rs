//! Admin dashboard: job postings and team members
//!
//! Access is gated on a stored token. Any 401/403 from the API drops the
//! session, which sends the page back to the login screen.

use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::api::ApiError;
use crate::core::api::models::{Job, JobType, TeamMember, format_posted_date};
use crate::core::content::avatar_url;
use crate::core::form::{FieldErrors, JobForm, MemberForm, messages};
use crate::core::routes::ADMIN_LOGIN_PATH;
use crate::core::session::AdminGuard;
use crate::ui::api::use_api;
use crate::ui::common::{
    BaseModal, ConfirmDialog, ErrorMessage, FormField, SelectField, Spinner, TextAreaField,
};
use crate::ui::form::FormHandle;
use crate::ui::session::{SessionState, use_session};
use crate::ui::{Icon, icons};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Jobs,
    Team,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Jobs => "Jobs",
            Tab::Team => "Team",
        }
    }
}

/// Record awaiting delete confirmation
#[derive(Debug, Clone, PartialEq)]
enum PendingDelete {
    Job { id: i64, title: String },
    Member { id: i64, name: String },
}

impl PendingDelete {
    fn prompt(&self) -> String {
        match self {
            PendingDelete::Job { title, .. } => {
                format!("Delete the \"{title}\" posting? Applicants will no longer see it.")
            }
            PendingDelete::Member { name, .. } => {
                format!("Remove {name} from the team page?")
            }
        }
    }
}

/// The standard types, plus the current label when a posting uses another
fn job_type_options(current: &JobType) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = JobType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.as_str().to_string()))
        .collect();
    if let JobType::Other(label) = current {
        options.push((label.clone(), label.clone()));
    }
    options
}

/// Create or edit a job posting
#[component]
fn JobEditor(
    draft: JobForm,
    on_saved: Callback<()>,
    on_unauthorized: Callback<()>,
) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let session = use_session();
    let form = FormHandle::persistent();
    let id = draft.id;

    let title = RwSignal::new(draft.title);
    let department = RwSignal::new(draft.department);
    let location = RwSignal::new(draft.location);
    let type_options = job_type_options(&draft.job_type);
    let job_type = RwSignal::new(String::from(draft.job_type));
    let description = RwSignal::new(draft.description);
    let errors = RwSignal::new(FieldErrors::default());

    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));
    let busy = Signal::derive(move || form.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = JobForm {
            id,
            title: title.get_untracked(),
            department: department.get_untracked(),
            location: location.get_untracked(),
            job_type: JobType::from_label(&job_type.get_untracked()),
            description: description.get_untracked(),
        };
        let input = match draft.validate() {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());

        let Some(token) = session.token() else {
            on_unauthorized.run(());
            return;
        };
        let Some(ticket) = form.begin() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = match id {
                Some(id) => api.update_job(&token, id, &input).await,
                None => api.create_job(&token, &input).await,
            };
            let unauthorized = result.as_ref().is_err_and(ApiError::is_unauthorized);
            if form.complete(ticket, result, None, messages::SAVE_FAILED).is_some() {
                on_saved.run(());
            } else if unauthorized {
                on_unauthorized.run(());
            }
        });
    };

    view! {
        <form class="editor-form" on:submit=on_submit novalidate>
            <ErrorMessage error=Signal::derive(move || form.error_message())/>
            <FormField label="Title" name="title" required=true value=title disabled=busy error=error_for("title")/>
            <div class="form-row">
                <FormField
                    label="Department"
                    name="department"
                    required=true
                    value=department
                    disabled=busy
                    error=error_for("department")
                />
                <FormField
                    label="Location"
                    name="location"
                    required=true
                    value=location
                    disabled=busy
                    error=error_for("location")
                />
            </div>
            <SelectField label="Type" name="job_type" value=job_type options=type_options disabled=busy/>
            <TextAreaField
                label="Description"
                name="description"
                required=true
                rows=5
                value=description
                disabled=busy
                error=error_for("description")
            />
            <div class="modal-actions">
                <button type="submit" class="btn-primary" disabled=move || busy.get()>
                    {move || match (busy.get(), id.is_some()) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Job",
                        (false, false) => "Create Job",
                    }}
                </button>
            </div>
        </form>
    }
}

/// Create or edit a team member
#[component]
fn MemberEditor(
    draft: MemberForm,
    on_saved: Callback<()>,
    on_unauthorized: Callback<()>,
) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let session = use_session();
    let form = FormHandle::persistent();
    let id = draft.id;

    let name = RwSignal::new(draft.name);
    let role = RwSignal::new(draft.role);
    let image = RwSignal::new(draft.image);
    let description = RwSignal::new(draft.description);
    let errors = RwSignal::new(FieldErrors::default());

    let error_for = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));
    let busy = Signal::derive(move || form.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = MemberForm {
            id,
            name: name.get_untracked(),
            role: role.get_untracked(),
            image: image.get_untracked(),
            description: description.get_untracked(),
        };
        let input = match draft.validate() {
            Ok(input) => input,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());

        let Some(token) = session.token() else {
            on_unauthorized.run(());
            return;
        };
        let Some(ticket) = form.begin() else {
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = match id {
                Some(id) => api.update_member(&token, id, &input).await,
                None => api.create_member(&token, &input).await,
            };
            let unauthorized = result.as_ref().is_err_and(ApiError::is_unauthorized);
            if form.complete(ticket, result, None, messages::SAVE_FAILED).is_some() {
                on_saved.run(());
            } else if unauthorized {
                on_unauthorized.run(());
            }
        });
    };

    view! {
        <form class="editor-form" on:submit=on_submit novalidate>
            <ErrorMessage error=Signal::derive(move || form.error_message())/>
            <div class="form-row">
                <FormField label="Name" name="name" required=true value=name disabled=busy error=error_for("name")/>
                <FormField label="Role" name="role" required=true value=role disabled=busy error=error_for("role")/>
            </div>
            <FormField
                label="Image URL"
                name="image"
                input_type="url"
                placeholder="Leave empty for a generated avatar"
                value=image
                disabled=busy
            />
            <TextAreaField label="Bio" name="description" rows=4 value=description disabled=busy/>
            <div class="modal-actions">
                <button type="submit" class="btn-primary" disabled=move || busy.get()>
                    {move || match (busy.get(), id.is_some()) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Member",
                        (false, false) => "Add Member",
                    }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn JobRow(job: Job, on_edit: Callback<Job>, on_delete: Callback<PendingDelete>) -> impl IntoView {
    let posted = job.created_at.as_deref().map(format_posted_date);
    let pending = PendingDelete::Job {
        id: job.id,
        title: job.title.clone(),
    };
    let edited = job.clone();

    view! {
        <li class="admin-row card">
            <div class="admin-row-body">
                <div class="admin-row-title">
                    <h3 class="card-title">{job.title}</h3>
                    <span class="job-type">{String::from(job.job_type)}</span>
                    <span class={if job.is_active { "status-chip status-active" } else { "status-chip status-inactive" }}>
                        {if job.is_active { "Active" } else { "Inactive" }}
                    </span>
                </div>
                <p class="job-meta">
                    <span>
                        <Icon name=icons::BRIEFCASE class="icon-text"/>
                        {job.department}
                    </span>
                    <span>
                        <Icon name=icons::MAP_PIN class="icon-text"/>
                        {job.location}
                    </span>
                    {posted.map(|p| view! { <span class="job-posted">{format!("Posted {p}")}</span> })}
                </p>
            </div>
            <div class="admin-row-actions">
                <button class="icon-button" title="Edit" on:click=move |_| on_edit.run(edited.clone())>
                    <Icon name=icons::EDIT/>
                </button>
                <button
                    class="icon-button icon-button-danger"
                    title="Delete"
                    on:click=move |_| on_delete.run(pending.clone())
                >
                    <Icon name=icons::TRASH/>
                </button>
            </div>
        </li>
    }
}

#[component]
fn MemberRow(
    member: TeamMember,
    on_edit: Callback<TeamMember>,
    on_delete: Callback<PendingDelete>,
) -> impl IntoView {
    let photo = if member.image.trim().is_empty() {
        avatar_url(&member.name)
    } else {
        member.image.clone()
    };
    let pending = PendingDelete::Member {
        id: member.id,
        name: member.name.clone(),
    };
    let edited = member.clone();

    view! {
        <li class="admin-row card">
            <img src=photo alt=member.name.clone() class="admin-avatar"/>
            <div class="admin-row-body">
                <h3 class="card-title">{member.name}</h3>
                <p class="team-role">{member.role}</p>
            </div>
            <div class="admin-row-actions">
                <button class="icon-button" title="Edit" on:click=move |_| on_edit.run(edited.clone())>
                    <Icon name=icons::EDIT/>
                </button>
                <button
                    class="icon-button icon-button-danger"
                    title="Remove"
                    on:click=move |_| on_delete.run(pending.clone())
                >
                    <Icon name=icons::TRASH/>
                </button>
            </div>
        </li>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let session = use_session();
    let navigate = use_navigate();

    let tab = RwSignal::new(Tab::Jobs);
    // None while loading
    let jobs = RwSignal::new(None::<Vec<Job>>);
    let team = RwSignal::new(None::<Vec<TeamMember>>);
    let notice = RwSignal::new(None::<String>);
    let refresh = RwSignal::new(0u32);

    let job_editor = RwSignal::new(None::<JobForm>);
    let member_editor = RwSignal::new(None::<MemberForm>);
    let pending_delete = RwSignal::new(None::<PendingDelete>);

    let on_unauthorized = Callback::new(move |_| {
        warn!("Admin session rejected by the API, signing out");
        session.sign_out();
    });

    let reload = move || refresh.update(|n| *n = n.wrapping_add(1));

    // Guard, then load. Reruns on sign out and after every change.
    Effect::new(move |_| {
        refresh.track();
        if session.state.get() == SessionState::Restoring {
            return;
        }
        let token = match session.guard() {
            AdminGuard::Allow(token) => token,
            AdminGuard::RedirectToLogin => {
                navigate(ADMIN_LOGIN_PATH, Default::default());
                return;
            }
        };

        let api = api.get_value();
        spawn_local(async move {
            match api.list_all_jobs(&token).await {
                Ok(list) => {
                    jobs.try_set(Some(list.jobs));
                }
                Err(e) if e.is_unauthorized() => {
                    on_unauthorized.run(());
                    return;
                }
                Err(e) => {
                    warn!("Failed to load jobs: {e}");
                    jobs.try_set(Some(Vec::new()));
                    notice.try_set(Some(e.user_message(messages::LOAD_FAILED)));
                }
            }
            match api.list_team().await {
                Ok(list) => {
                    team.try_set(Some(list.data));
                }
                Err(e) => {
                    warn!("Failed to load team: {e}");
                    team.try_set(Some(Vec::new()));
                    notice.try_set(Some(e.user_message(messages::LOAD_FAILED)));
                }
            }
        });
    });

    let on_job_saved = Callback::new(move |_| {
        job_editor.set(None);
        reload();
    });
    let on_member_saved = Callback::new(move |_| {
        member_editor.set(None);
        reload();
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        let Some(token) = session.token() else {
            on_unauthorized.run(());
            return;
        };
        let api = api.get_value();
        spawn_local(async move {
            let result = match target {
                PendingDelete::Job { id, .. } => api.delete_job(&token, id).await,
                PendingDelete::Member { id, .. } => api.delete_member(&token, id).await,
            };
            match result {
                Ok(_) => {
                    notice.try_set(None);
                    refresh.try_update(|n| *n = n.wrapping_add(1));
                }
                Err(e) if e.is_unauthorized() => on_unauthorized.run(()),
                Err(e) => {
                    warn!("Delete failed: {e}");
                    notice.try_set(Some(e.user_message(messages::DELETE_FAILED)));
                }
            }
        });
    });

    let on_edit_job = Callback::new(move |job: Job| job_editor.set(Some(JobForm::edit(&job))));
    let on_edit_member =
        Callback::new(move |member: TeamMember| member_editor.set(Some(MemberForm::edit(&member))));
    let on_delete = Callback::new(move |target: PendingDelete| pending_delete.set(Some(target)));

    let on_add = move |_| match tab.get_untracked() {
        Tab::Jobs => job_editor.set(Some(JobForm::default())),
        Tab::Team => member_editor.set(Some(MemberForm::default())),
    };

    let display_name = move || {
        session
            .profile
            .with(|p| p.as_ref().map(|p| p.display_name().to_string()))
            .unwrap_or_else(|| "Admin".to_string())
    };

    view! {
        <Show
            when=move || session.is_signed_in()
            fallback=|| view! { <Spinner label="Checking session..." centered=true/> }
        >
            <div class="admin-dashboard">
                <header class="admin-header">
                    <div class="container admin-header-inner">
                        <div>
                            <A href="/" attr:class="navbar-brand">"Edutalks"</A>
                            <p class="text-muted">{move || format!("Signed in as {}", display_name())}</p>
                        </div>
                        <button class="btn-secondary" on:click=move |_| session.sign_out()>
                            <Icon name=icons::LOGOUT class="icon-text"/>
                            "Logout"
                        </button>
                    </div>
                </header>

                <main class="container admin-main">
                    <ErrorMessage error=notice/>
                    <div class="admin-toolbar">
                        <div class="tabs" role="tablist">
                            {[Tab::Jobs, Tab::Team]
                                .into_iter()
                                .map(|t| {
                                    view! {
                                        <button
                                            role="tab"
                                            class="tab"
                                            class:tab-active=move || tab.get() == t
                                            aria-selected=move || (tab.get() == t).to_string()
                                            on:click=move |_| tab.set(t)
                                        >
                                            {t.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button class="btn-primary" on:click=on_add>
                            <Icon name=icons::PLUS class="icon-text"/>
                            {move || match tab.get() {
                                Tab::Jobs => "Add Job",
                                Tab::Team => "Add Member",
                            }}
                        </button>
                    </div>

                    {move || match tab.get() {
                        Tab::Jobs => match jobs.get() {
                            None => view! { <Spinner centered=true/> }.into_any(),
                            Some(list) if list.is_empty() => view! {
                                <p class="empty-state">"No job postings yet."</p>
                            }
                            .into_any(),
                            Some(list) => view! {
                                <ul class="admin-list">
                                    {list
                                        .into_iter()
                                        .map(|job| view! { <JobRow job=job on_edit=on_edit_job on_delete=on_delete/> })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any(),
                        },
                        Tab::Team => match team.get() {
                            None => view! { <Spinner centered=true/> }.into_any(),
                            Some(list) if list.is_empty() => view! {
                                <p class="empty-state">"No team members yet."</p>
                            }
                            .into_any(),
                            Some(list) => view! {
                                <ul class="admin-list">
                                    {list
                                        .into_iter()
                                        .map(|member| view! {
                                            <MemberRow member=member on_edit=on_edit_member on_delete=on_delete/>
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any(),
                        },
                    }}
                </main>
            </div>
        </Show>

        <BaseModal
            title=Signal::derive(move || {
                job_editor.with(|d| match d.as_ref().and_then(|d| d.id) {
                    Some(_) => "Edit Job".to_string(),
                    None => "New Job".to_string(),
                })
            })
            is_open=Signal::derive(move || job_editor.with(Option::is_some))
            on_close=Callback::new(move |_| job_editor.set(None))
        >
            {move || job_editor.get().map(|draft| view! {
                <JobEditor draft=draft on_saved=on_job_saved on_unauthorized=on_unauthorized/>
            })}
        </BaseModal>

        <BaseModal
            title=Signal::derive(move || {
                member_editor.with(|d| match d.as_ref().and_then(|d| d.id) {
                    Some(_) => "Edit Team Member".to_string(),
                    None => "New Team Member".to_string(),
                })
            })
            is_open=Signal::derive(move || member_editor.with(Option::is_some))
            on_close=Callback::new(move |_| member_editor.set(None))
        >
            {move || member_editor.get().map(|draft| view! {
                <MemberEditor draft=draft on_saved=on_member_saved on_unauthorized=on_unauthorized/>
            })}
        </BaseModal>

        <ConfirmDialog
            title="Confirm Delete"
            message=Signal::derive(move || {
                pending_delete.with(|p| p.as_ref().map(PendingDelete::prompt).unwrap_or_default())
            })
            is_open=Signal::derive(move || pending_delete.with(Option::is_some))
            on_confirm=confirm_delete
            on_cancel=Callback::new(move |_| pending_delete.set(None))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Delete prompts
    // ========================================================================

    #[test]
    fn test_delete_prompt_names_the_record() {
        let job = PendingDelete::Job {
            id: 3,
            title: "Rust Intern".to_string(),
        };
        assert!(job.prompt().contains("\"Rust Intern\""));

        let member = PendingDelete::Member {
            id: 9,
            name: "Asha".to_string(),
        };
        assert_eq!(member.prompt(), "Remove Asha from the team page?");
    }

    #[test]
    fn test_job_type_options_cover_every_type() {
        let options = job_type_options(&JobType::PartTime);
        assert_eq!(options.len(), JobType::ALL.len());
        assert_eq!(options[0], ("Full-time".to_string(), "Full-time".to_string()));
        assert!(
            options
                .iter()
                .all(|(value, _)| JobType::from_label(value).as_str() == value)
        );
    }

    #[test]
    fn test_job_type_options_keep_custom_label() {
        let options = job_type_options(&JobType::Other("Internship".to_string()));
        assert_eq!(options.len(), JobType::ALL.len() + 1);
        assert_eq!(
            options.last(),
            Some(&("Internship".to_string(), "Internship".to_string()))
        );
    }
}
