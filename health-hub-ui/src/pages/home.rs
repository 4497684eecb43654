//! Home Page
//!
//! Landing page: animated hero, impact figures and testimonials.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use health_hub::views::{TestimonialCarousel, Typewriter};
use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <Hero />
            <Impact />
            <Testimonials />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let (typed, set_typed) = create_signal(String::new());

    let alive = Rc::new(Cell::new(true));
    run_typewriter(
        Rc::new(RefCell::new(Typewriter::default())),
        set_typed,
        alive.clone(),
    );
    on_cleanup(move || alive.set(false));

    view! {
        <section class="bg-gradient-to-r from-teal-600 to-emerald-300 text-white py-24">
            <div class="container mx-auto px-4 text-center md:text-left">
                <h1 class="text-4xl md:text-5xl font-bold mb-6">
                    "Achieve " <span>{move || typed.get()}</span>
                    <span class="animate-pulse">"|"</span>
                </h1>
                <p class="text-lg md:text-xl mb-8">
                    "Join our wellness programs to transform your health with expert guidance."
                </p>
                <A
                    href="/enroll"
                    class="bg-rose-500 hover:bg-rose-600 text-white text-lg font-semibold py-3 px-8 rounded-lg transition-colors inline-block"
                >
                    "Start Your Journey"
                </A>
            </div>
        </section>
    }
}

/// Step the typewriter, then reschedule after the delay it asks for
fn run_typewriter(
    typewriter: Rc<RefCell<Typewriter>>,
    set_typed: WriteSignal<String>,
    alive: Rc<Cell<bool>>,
) {
    if !alive.get() {
        return;
    }
    let (text, delay) = typewriter.borrow_mut().step();
    set_typed.set(text);

    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || run_typewriter(typewriter, set_typed, alive)).forget();
}

#[component]
fn Impact() -> impl IntoView {
    let figures = [
        ("👤", "500+", "Satisfied Clients"),
        ("♥", "20+", "Wellness Programs"),
        ("👥", "10+", "Expert Coaches"),
    ];

    view! {
        <section class="py-16 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Our Impact"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {figures
                        .into_iter()
                        .map(|(icon, figure, label)| view! {
                            <div class="bg-gray-50 p-6 rounded-lg shadow-lg text-center">
                                <div class="text-4xl text-teal-600 mb-4">{icon}</div>
                                <h3 class="text-2xl font-semibold">{figure}</h3>
                                <p class="text-gray-600">{label}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    let carousel = create_rw_signal(TestimonialCarousel::default());

    view! {
        <section class="bg-emerald-100 py-16">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-12">"Hear From Our Community"</h2>
                <div class="bg-white p-8 rounded-lg shadow-lg max-w-2xl mx-auto relative">
                    {move || carousel.with(|c| c.current().map(|t| view! {
                        <p class="text-gray-600 mb-4 italic px-8">{format!("\"{}\"", t.text)}</p>
                        <p class="text-lg font-semibold text-teal-600 px-8">{format!("- {}", t.name)}</p>
                    }))}
                    <button
                        class="absolute left-2 top-1/2 -translate-y-1/2 text-teal-600 hover:text-teal-700 text-2xl"
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update(TestimonialCarousel::previous)
                    >
                        "‹"
                    </button>
                    <button
                        class="absolute right-2 top-1/2 -translate-y-1/2 text-teal-600 hover:text-teal-700 text-2xl"
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update(TestimonialCarousel::next)
                    >
                        "›"
                    </button>
                </div>
            </div>
        </section>
    }
}
