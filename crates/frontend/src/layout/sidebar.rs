use leptos::prelude::*;

use super::ActiveView;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar(active: RwSignal<ActiveView>) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || collapsed.get()>
            <div class="sidebar__top">
                <Show when=move || !collapsed.get()>
                    <h2 class="sidebar__title">"Menú"</h2>
                </Show>
                <button
                    class="sidebar__toggle"
                    on:click=move |_| set_collapsed.update(|c| *c = !*c)
                >
                    {move || icon(if collapsed.get() { "chevron-right" } else { "chevron-left" })}
                </button>
            </div>
            <nav class="sidebar__nav">
                <ul>
                    {ActiveView::ALL
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <li>
                                    <button
                                        class="sidebar__link"
                                        class:sidebar__link--active=move || active.get() == entry
                                        on:click=move |_| active.set(entry)
                                    >
                                        <span class="sidebar__icon">{icon(entry.icon_name())}</span>
                                        <Show when=move || !collapsed.get()>
                                            <span class="sidebar__label">{entry.title()}</span>
                                        </Show>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </aside>
    }
}
