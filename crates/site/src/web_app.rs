use leptos::*;
use leptos_meta::*;
use reader_state::{use_bookmarks, use_language, Bookmark, BookmarkProvider, LanguageProvider};

#[component]
pub fn ReaderApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Bhagavad Gita" />
        <Meta name="description" content="Read the Bhagavad Gita in English or Hindi." />

        <LanguageProvider>
            <BookmarkProvider>
                <main class="reader-root">
                    <ReaderShell />
                </main>
            </BookmarkProvider>
        </LanguageProvider>
    }
}

#[component]
pub fn ReaderShell() -> impl IntoView {
    let language = use_language();
    let bookmarks = use_bookmarks();

    view! {
        <header class="reader-header">
            <h1>"Bhagavad Gita"</h1>
            <button class="language-toggle" on:click=move |_| language.toggle_language()>
                {move || language.language().label()}
            </button>
        </header>
        <section class="bookmarks">
            <h2>"Bookmarks"</h2>
            <Show
                when=move || !bookmarks.bookmarks().is_empty()
                fallback=|| view! { <p class="bookmarks-empty">"No bookmarks yet."</p> }
            >
                <ul class="bookmark-list">
                    <For
                        each=move || bookmarks.bookmarks().to_vec()
                        key=|bookmark| (bookmark.chapter_id, bookmark.verse_id)
                        children=move |bookmark: Bookmark| {
                            view! {
                                <li class="bookmark">
                                    <span>
                                        {format!("{}.{}", bookmark.chapter_id, bookmark.verse_number)}
                                    </span>
                                    <button on:click=move |_| {
                                        bookmarks
                                            .toggle_bookmark(
                                                bookmark.chapter_id,
                                                bookmark.verse_id,
                                                bookmark.verse_number,
                                            )
                                    }>"Remove"</button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
