use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center pt-16 relative overflow-hidden bg-black"
        >
            <div class="absolute inset-0 bg-[linear-gradient(rgba(255,255,255,0.03)_1px,transparent_1px),linear-gradient(90deg,rgba(255,255,255,0.03)_1px,transparent_1px)] bg-[size:40px_40px] opacity-20"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[300px] h-[300px] md:w-[600px] md:h-[600px] bg-white/5 rounded-full blur-[100px] md:blur-[150px] animate-pulse-slow"></div>

            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center relative z-10 w-full">
                <div class="animate-fade-in-up">
                    <div class="inline-block mb-6 mt-8 px-4 py-1 border border-neutral-700 bg-neutral-950/50 backdrop-blur-sm font-mono text-[10px] sm:text-xs tracking-[0.2em] text-neutral-400 uppercase">
                        "System Ready"
                    </div>

                    <h1 class="text-4xl sm:text-5xl md:text-7xl lg:text-8xl mb-6 text-white font-mono tracking-tighter leading-none">
                        "JOHNLEE"
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-b from-neutral-200 to-neutral-600">
                            "JUMAO-AS"
                        </span>
                    </h1>

                    <p class="mt-6 max-w-2xl mx-auto text-base sm:text-lg md:text-xl text-neutral-500 mb-10 leading-relaxed font-light px-4">
                        "Aspiring Full Stack Engineer passionate about building modern web applications. "
                        <br class="hidden sm:block" />
                        "Fresh perspective. Eager to learn. Ready to build."
                    </p>

                    <div class="flex flex-col sm:flex-row justify-center gap-4 sm:gap-6 px-4">
                        <a
                            href="#projects"
                            class="px-8 py-4 bg-white hover:bg-neutral-200 text-black font-mono rounded-none flex items-center justify-center gap-2 group transition-all hover:scale-105 active:scale-95"
                        >
                            "View Work"
                            <span class="group-hover:translate-x-1 transition-transform">"→"</span>
                        </a>
                        <a
                            href="#contact"
                            class="px-8 py-4 flex items-center justify-center gap-2 transition-all border border-neutral-700 text-neutral-300 hover:bg-neutral-900 hover:text-white hover:border-white font-mono rounded-none hover:scale-105 active:scale-95"
                        >
                            "Contact_Me"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
