//! Programs Page
//!
//! Program form, filters, paged catalogue and CSV export.

use health_hub::export::{EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
use health_hub::model::Category;
use health_hub::views::programs::{create_program, fetch_programs};
use health_hub::views::{ProgramsAction, ProgramsView, RefreshPolicy};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::components::{Banners, Loading};
use crate::state::global::{use_global_state, GlobalState};

/// Programs page component
#[component]
pub fn Programs() -> impl IntoView {
    let state = use_global_state();
    let screen = create_rw_signal(ProgramsView::new(RefreshPolicy::default()));

    // Fetch on mount
    load(state.clone(), screen);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut prepared = None;
        screen.update(|s| prepared = s.prepare_submit());
        let Some(program) = prepared else {
            return;
        };

        let state = state_for_submit.clone();
        spawn_local(async move {
            let api = state.backend();
            let outcome = create_program(&api, program).await;
            let refetch = screen.with_untracked(|s| s.wants_refetch(&outcome));
            screen.update(|s| s.apply(outcome));
            if refetch {
                screen.update(|s| s.apply(ProgramsAction::LoadStarted));
                let outcome = fetch_programs(&api).await;
                screen.update(|s| s.apply(outcome));
            }
        });
    };

    let state_for_export = state;
    let on_export = move |_| {
        let csv = screen.with_untracked(|s| s.export_csv());
        let result = match csv {
            Ok(csv) => download(&csv).map_err(|e| format!("{:?}", e)),
            Err(e) => Err(e.to_string()),
        };
        if let Err(e) = result {
            web_sys::console::warn_1(&format!("CSV export failed: {}", e).into());
            state_for_export.show_error("Export failed");
        }
    };

    let notices = Signal::derive(move || screen.with(|s| s.notices.clone()));
    let counters = move || screen.with(|s| s.form.counters());

    view! {
        <div class="container mx-auto px-4 py-12 space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Wellness Programs"</h1>
                <button
                    class="bg-gray-800 hover:bg-gray-700 text-white px-4 py-2 rounded-lg"
                    on:click=on_export
                >
                    "Export CSV"
                </button>
            </div>

            <Banners
                notices=notices
                on_dismiss=Callback::new(move |_| screen.update(|s| s.apply(ProgramsAction::DismissError)))
            />

            // New program form
            <form on:submit=on_submit class="bg-white p-6 rounded-lg shadow-lg space-y-4">
                <div>
                    <input
                        type="text"
                        placeholder="Program Name"
                        class="w-full px-4 py-2 border rounded-lg"
                        prop:value=move || screen.with(|s| s.form.name.clone())
                        on:input=move |ev| screen.update(|s| s.apply(ProgramsAction::SetName(event_target_value(&ev))))
                    />
                    <p class="text-sm text-gray-500 mt-1">{move || counters().0}</p>
                </div>
                <div>
                    <textarea
                        placeholder="Description"
                        class="w-full px-4 py-2 border rounded-lg"
                        prop:value=move || screen.with(|s| s.form.description.clone())
                        on:input=move |ev| screen.update(|s| s.apply(ProgramsAction::SetDescription(event_target_value(&ev))))
                    />
                    <p class="text-sm text-gray-500 mt-1">{move || counters().1}</p>
                </div>
                <CategorySelect
                    placeholder="Select Category"
                    value=Signal::derive(move || screen.with(|s| s.form.category))
                    on_change=Callback::new(move |c| screen.update(|s| s.apply(ProgramsAction::SetCategory(c))))
                />
                <button
                    type="submit"
                    class="w-full bg-teal-600 hover:bg-teal-700 disabled:opacity-50 text-white font-semibold py-2 rounded-lg"
                    disabled=move || screen.with(|s| s.submitting)
                >
                    {move || if screen.with(|s| s.submitting) { "Adding..." } else { "Add Program" }}
                </button>
            </form>

            // Filters
            <div class="flex flex-col md:flex-row gap-4">
                <input
                    type="search"
                    placeholder="Search programs..."
                    class="flex-1 px-4 py-2 border rounded-lg"
                    prop:value=move || screen.with(|s| s.filter.search.clone())
                    on:input=move |ev| screen.update(|s| s.apply(ProgramsAction::SetSearch(event_target_value(&ev))))
                />
                <CategorySelect
                    placeholder="All Categories"
                    value=Signal::derive(move || screen.with(|s| s.filter.category))
                    on_change=Callback::new(move |c| screen.update(|s| s.apply(ProgramsAction::SetCategoryFilter(c))))
                />
            </div>

            // Catalogue
            {move || {
                if screen.with(|s| s.loading) {
                    return view! { <Loading /> }.into_view();
                }
                screen.with(|s| {
                    let page = s.current_page();
                    if page.items.is_empty() {
                        return view! { <p class="text-gray-500 text-center">"No programs found"</p> }.into_view();
                    }
                    let show_pager = page.show_pager();
                    let (number, total_pages) = (page.number, page.total_pages);
                    let (has_previous, has_next) = (page.has_previous(), page.has_next());
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {page
                                .items
                                .into_iter()
                                .map(|p| view! {
                                    <div class="bg-white p-6 rounded-lg shadow flex flex-col">
                                        <h3 class="text-xl font-semibold text-teal-600">{p.name.clone()}</h3>
                                        <span class="text-sm text-gray-500 mb-2">{p.category().unwrap_or_default().to_string()}</span>
                                        <p class="text-gray-600 flex-1">{p.description().unwrap_or("No description").to_string()}</p>
                                        <a
                                            href="/enroll"
                                            class="mt-4 text-center bg-rose-500 hover:bg-rose-600 text-white py-2 rounded-lg"
                                        >
                                            "Join Now"
                                        </a>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                        <Show when=move || show_pager>
                            <div class="flex items-center justify-center space-x-4 mt-6">
                                <button
                                    class="px-4 py-2 bg-gray-200 rounded-lg disabled:opacity-50"
                                    disabled=!has_previous
                                    on:click=move |_| screen.update(|s| s.apply(ProgramsAction::PreviousPage))
                                >
                                    "Previous"
                                </button>
                                <span>{format!("Page {} of {}", number, total_pages)}</span>
                                <button
                                    class="px-4 py-2 bg-gray-200 rounded-lg disabled:opacity-50"
                                    disabled=!has_next
                                    on:click=move |_| screen.update(|s| s.apply(ProgramsAction::NextPage))
                                >
                                    "Next"
                                </button>
                            </div>
                        </Show>
                    }
                    .into_view()
                })
            }}
        </div>
    }
}

/// Category picker; the empty option means "none"
#[component]
fn CategorySelect(
    placeholder: &'static str,
    value: Signal<Option<Category>>,
    on_change: Callback<Option<Category>>,
) -> impl IntoView {
    view! {
        <select
            class="px-4 py-2 border rounded-lg"
            prop:value=move || value.get().map(|c| c.to_string()).unwrap_or_default()
            on:change=move |ev| on_change.call(event_target_value(&ev).parse::<Category>().ok())
        >
            <option value="">{placeholder}</option>
            {Category::all()
                .iter()
                .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                .collect_view()}
        </select>
    }
}

fn load(state: GlobalState, screen: RwSignal<ProgramsView>) {
    spawn_local(async move {
        screen.update(|s| s.apply(ProgramsAction::LoadStarted));
        let outcome = fetch_programs(&state.backend()).await;
        screen.update(|s| s.apply(outcome));
    });
}

/// Hand a CSV document to the browser as a file download
fn download(csv: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(csv));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(EXPORT_CONTENT_TYPE);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)
}
