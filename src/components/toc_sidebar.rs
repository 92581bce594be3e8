//! Table of Contents Sidebar

use leptos::prelude::*;

use crate::markdown::TocEntry;

#[component]
pub fn TocSidebar(#[prop(into)] entries: Signal<Vec<TocEntry>>) -> impl IntoView {
    view! {
        <Show when=move || !entries.get().is_empty()>
            <nav class="toc-sidebar">
                <h3>"On this page"</h3>
                <ul>
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <li class=format!("toc-level-{}", entry.level)>
                                        <a href=format!("#{}", entry.slug)>{entry.title.clone()}</a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>
        </Show>
    }
}
