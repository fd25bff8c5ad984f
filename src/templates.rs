use maud::{DOCTYPE, Markup, html};

use crate::entities::{actor, director, film};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn index_page() -> String {
    page(
        "Cinelog",
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { "Cinelog" }
                    p class="mt-2 text-gray-600" { "Films, directors, and actors." }

                    ul class="mt-8 space-y-3" {
                        li { a class="text-blue-600 hover:text-blue-800" href="/films" { "Films" } }
                        li { a class="text-blue-600 hover:text-blue-800" href="/director" { "Directors" } }
                        li { a class="text-blue-600 hover:text-blue-800" href="/actors" { "Actors" } }
                    }
                }
            }
        },
    )
}

pub fn films_page(films: &[(film::Model, Option<director::Model>)]) -> String {
    page(
        "Films",
        html! {
            div class="max-w-4xl mx-auto px-6 py-10" {
                (heading("Films"))

                @if films.is_empty() {
                    (empty_card("No films in the catalog yet."))
                } @else {
                    div class="mt-10 space-y-4" {
                        @for (film, director) in films {
                            div class="bg-white shadow rounded-lg p-6" {
                                h2 class="text-xl font-semibold text-gray-900" {
                                    a class="hover:text-blue-800" href=(format!("/film/{}", film.id)) { (film.title) }
                                    span class="ml-2 font-normal text-gray-500" { "(" (film.year) ")" }
                                }
                                @if let Some(director) = director {
                                    p class="mt-1 text-sm text-gray-600" { "Directed by " (director.name) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn film_page(film: &film::Model, director: Option<&director::Model>) -> String {
    page(
        &film.title,
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (film.title) }
                    p class="mt-2 text-gray-600" { "Released " (film.year) }
                    @if let Some(director) = director {
                        p class="mt-2 text-gray-600" {
                            "Directed by "
                            a class="text-blue-600 hover:text-blue-800" href=(format!("/director/{}", director.id)) { (director.name) }
                        }
                    }
                    a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/films" { "All films" }
                }
            }
        },
    )
}

pub fn directors_page(directors: &[(director::Model, Vec<film::Model>)]) -> String {
    page(
        "Directors",
        html! {
            div class="max-w-4xl mx-auto px-6 py-10" {
                (heading("Directors"))

                @if directors.is_empty() {
                    (empty_card("No directors in the catalog yet."))
                } @else {
                    div class="mt-10 space-y-4" {
                        @for (director, films) in directors {
                            div class="bg-white shadow rounded-lg p-6" {
                                h2 class="text-xl font-semibold text-gray-900" {
                                    a class="hover:text-blue-800" href=(format!("/director/{}", director.id)) { (director.name) }
                                }
                                (film_list(films))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn director_page(director: &director::Model, films: &[film::Model]) -> String {
    page(
        &director.name,
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (director.name) }
                    @if let Some(birth_year) = director.birth_year {
                        p class="mt-2 text-gray-600" { "Born " (birth_year) }
                    }
                    (film_list(films))
                    a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/director" { "All directors" }
                }
            }
        },
    )
}

pub fn actors_page(actors: &[(actor::Model, Vec<film::Model>)]) -> String {
    page(
        "Actors",
        html! {
            div class="max-w-4xl mx-auto px-6 py-10" {
                (heading("Actors"))

                @if actors.is_empty() {
                    (empty_card("No actors in the catalog yet."))
                } @else {
                    div class="mt-10 space-y-4" {
                        @for (actor, films) in actors {
                            div class="bg-white shadow rounded-lg p-6" {
                                h2 class="text-xl font-semibold text-gray-900" {
                                    a class="hover:text-blue-800" href=(format!("/actor/{}", actor.id)) { (actor.name) }
                                }
                                (film_list(films))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn actor_page(actor: &actor::Model, films: &[film::Model]) -> String {
    page(
        &actor.name,
        html! {
            div class="max-w-2xl mx-auto px-6 py-12" {
                div class="bg-white shadow rounded-lg p-8" {
                    h1 class="text-3xl font-bold text-gray-900" { (actor.name) }
                    (film_list(films))
                    a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/actors" { "All actors" }
                }
            }
        },
    )
}

fn heading(title: &str) -> Markup {
    html! {
        div class="flex items-start justify-between gap-6" {
            h1 class="text-3xl font-bold text-gray-900" { (title) }
            a class="text-sm text-blue-600 hover:text-blue-800" href="/" { "Catalog home" }
        }
    }
}

fn empty_card(message: &str) -> Markup {
    html! {
        div class="mt-10 bg-white shadow rounded-lg p-8" {
            p class="text-gray-600" { (message) }
        }
    }
}

fn film_list(films: &[film::Model]) -> Markup {
    html! {
        @if films.is_empty() {
            p class="mt-2 text-sm text-gray-500" { "—" }
        } @else {
            ul class="mt-2 space-y-1" {
                @for film in films {
                    li class="text-sm text-gray-700" {
                        a class="hover:text-blue-800" href=(format!("/film/{}", film.id)) {
                            span class="font-medium" { (film.title) }
                        }
                        span class="text-gray-500" { " · " (film.year) }
                    }
                }
            }
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-gray-50" { (body) }
        }
    }
    .into_string()
}
